use hthscan::engine::config::ScanConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub show_progress: bool,
    pub scan_config: ScanConfig,
}
