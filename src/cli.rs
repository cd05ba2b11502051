use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "vidcat",
    version,
    about = "Concatenate the videos of a directory in name or modification-time order"
)]
pub struct Cli {
    /// The directory containing the videos to be processed
    #[arg(long, default_value = ".")]
    pub src_dir: PathBuf,

    /// The regex matching pattern for wanted files
    #[arg(long, default_value = "")]
    pub match_pattern: String,

    /// The output directory for processed videos
    #[arg(long, default_value = "out")]
    pub out_dir: PathBuf,

    /// File name of the concatenated video inside the output directory
    #[arg(long, default_value = "concat.mp4")]
    pub out_file: String,

    /// The order criteria of files to concatenate [name|date_modified]
    #[arg(long, default_value = "name")]
    pub order_by: String,

    /// The order of files to concatenate [asc|desc]
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Listing format on stdout [text|json]
    #[arg(long, default_value = "text")]
    pub output: String,

    /// External concatenation program
    #[arg(long, default_value = crate::concat::DEFAULT_TOOL)]
    pub tool: PathBuf,

    /// Only print the ordered listing
    #[arg(long)]
    pub list_only: bool,

    /// Print the concatenation command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if self.list_only {
            return Ok(());
        }

        if self.out_file.is_empty() {
            return Err("out-file must not be empty".to_string());
        }

        if self.out_file.contains(['/', std::path::MAIN_SEPARATOR]) {
            return Err(format!(
                "out-file must be a file name, not a path: {}",
                self.out_file
            ));
        }

        if self.tool.as_os_str().is_empty() {
            return Err("tool must not be empty".to_string());
        }

        Ok(())
    }
}
