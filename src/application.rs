use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use image::ImageFormat::Png;

use super::blend;
use super::bmp::decode;
use super::bmp::encode;
use super::bmp::header::BmpHeader;
use super::bmp::raster::Image;
use super::bmp::RowLayout;
use super::error::BlendError;
use super::error::BlendResult;
use super::ratio::Ratio;


pub struct AppOptions {
    input_a: PathBuf,
    input_b: PathBuf,
    output: PathBuf,
    ratio: Ratio,
    layout: RowLayout,
    preview: Option<PathBuf>,
}

impl Default for AppOptions {
    fn default() -> Self {
        AppOptions {
            input_a: Default::default(),
            input_b: Default::default(),
            output: Default::default(),
            ratio: Ratio::HALF,
            layout: Default::default(),
            preview: None,
        }
    }
}

impl AppOptions {

    pub fn set_inputs(&mut self, a: &str, b: &str) {
        self.input_a = PathBuf::from(a);
        self.input_b = PathBuf::from(b);
    }

    pub fn set_output(&mut self, path: &str) {
        self.output = PathBuf::from(path);
    }

    pub fn set_ratio(&mut self, ratio: Ratio) {
        self.ratio = ratio;
    }

    pub fn set_layout(&mut self, layout: RowLayout) {
        self.layout = layout;
    }

    pub fn set_preview(&mut self, path: Option<&str>) {
        self.preview = path.map(PathBuf::from);
    }
}

pub struct Application {
    options: AppOptions,
}

impl Application {

    pub fn new(options: AppOptions) -> Self {
        Application {
            options
        }
    }

    pub fn run(&self) -> BlendResult<()> {
        let opts = &self.options;

        let header = {
            let mut ifile = open(&opts.input_a)?;
            decode::extract_header(&mut ifile)?
        };
        let image_a = self.load(&opts.input_a)?;
        let image_b = self.load(&opts.input_b)?;
        log::info!("image 1 dimensions: {} x {}", image_a.width(), image_a.height());
        log::info!("image 2 dimensions: {} x {}", image_b.width(), image_b.height());

        let result = blend::blend(&image_a, &image_b, opts.ratio)?;
        drop(image_a);
        drop(image_b);

        self.save(&result, &header)?;
        log::info!("blending complete. result saved as '{}'", opts.output.display());

        if let Some(preview) = &opts.preview {
            result.to_rgb_image().save_with_format(preview, Png)?;
            log::info!("preview saved as '{}'", preview.display());
        }
        Ok(())
    }

    fn load(&self, path: &Path) -> BlendResult<Image> {
        let mut ifile = open(path)?;
        decode::decode(&mut ifile, self.options.layout)
    }

    fn save(&self, image: &Image, header: &BmpHeader) -> BlendResult<()> {
        encode::encode_file(&self.options.output, image, header, self.options.layout)
    }
}

fn open(path: &Path) -> BlendResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| BlendError::Open { path: path.to_path_buf(), source })
}
