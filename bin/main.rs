mod arg;
mod fs;

use ::clap::Parser as _;
use ::env_logger::Builder;
use ::log::error;
use ::log::info;
use ::log::warn;
use ::log::LevelFilter;
use ::pdfstream::Dictionary;
use ::pdfstream::Parser;
use ::pdfstream::Stream;
use ::std::process::ExitCode;

use self::arg::Args;
use self::fs::read_file;
use self::fs::write_output;

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG takes precedence over the verbose flag
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new().filter_level(level).parse_default_env().init();

    let stream = match read_stream(&args) {
        Some(stream) => stream,
        None => return ExitCode::FAILURE,
    };

    let decoded = match stream.defilter() {
        Ok(decoded) => decoded,
        Err(err) => {
            error!("Failed to decode the stream: {} ({:?})", err, err.kind());
            return ExitCode::FAILURE;
        }
    };
    info!("Decoded {} bytes into {}", stream.data().len(), decoded.len());

    if let Err(err) = write_output(args.output.as_deref(), &decoded) {
        error!("Failed to write the decoded data: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn read_stream(args: &Args) -> Option<Stream> {
    if let Some(path) = &args.file {
        let buffer = match read_file(path) {
            Ok(buffer) => buffer,
            Err(err) => {
                error!("Failed to read {}: {}", path.display(), err);
                return None;
            }
        };
        return match Stream::parse(&buffer) {
            Ok((remains, stream)) => {
                if !remains.is_empty() {
                    warn!("Ignoring {} bytes after endstream", remains.len());
                }
                Some(stream)
            }
            Err(err) => {
                error!("Failed to parse the stream object: {}", err);
                None
            }
        };
    }

    let data = args.data.as_deref().unwrap_or_default();
    let mut dictionary = Dictionary::default();
    if let Some(filter) = &args.filter {
        dictionary.insert("Filter", filter.as_str());
    }
    let mut decode_parms = Dictionary::default();
    for (key, value) in [
        ("Predictor", args.predictor),
        ("Columns", args.columns),
        ("Colors", args.colors),
        ("BitsPerComponent", args.bits_per_component),
    ] {
        if let Some(value) = value {
            decode_parms.insert(key, value);
        }
    }
    if !decode_parms.is_empty() {
        dictionary.insert("DecodeParms", decode_parms);
    }
    dictionary.insert("Length", data.len() as i128);

    Some(Stream::new(dictionary, data.as_bytes().to_vec()))
}
