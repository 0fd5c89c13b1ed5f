// A module to parse command line arguments

use ::clap::ArgGroup;
use ::clap::Parser;
use ::std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "pdfstream",
    version = "0.1.0",
    about = "Decode the data of a PDF stream object"
)]
#[clap(group(ArgGroup::new("input").required(true).args(&["file", "data"])))]
pub struct Args {
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,
    #[clap(
        short,
        long,
        help = "A file holding a single stream object: << /Length ... >> stream ... endstream"
    )]
    pub file: Option<PathBuf>,
    #[clap(
        short,
        long,
        requires = "filter",
        help = "Raw stream data given on the command line"
    )]
    pub data: Option<String>,
    #[clap(long, help = "The filter to apply to --data, e.g. FlateDecode or AHx")]
    pub filter: Option<String>,
    #[clap(short, long, help = "DecodeParms Predictor entry for --data")]
    pub predictor: Option<i128>,
    #[clap(long, help = "DecodeParms Columns entry for --data")]
    pub columns: Option<i128>,
    #[clap(long, help = "DecodeParms Colors entry for --data")]
    pub colors: Option<i128>,
    #[clap(long, help = "DecodeParms BitsPerComponent entry for --data")]
    pub bits_per_component: Option<i128>,
    #[clap(
        short,
        long,
        help = "Write the decoded data to this file instead of the standard output"
    )]
    pub output: Option<PathBuf>,
}
