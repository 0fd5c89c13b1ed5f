use ::log::debug;
use ::log::info;
use ::std::fs::read;
use ::std::fs::write;
use ::std::io::stdout;
use ::std::io::Result as IoResult;
use ::std::io::Write;
use ::std::path::Path;

pub(super) fn read_file(path: &Path) -> IoResult<Vec<u8>> {
    let buffer = read(path)?;
    debug!("Read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

pub(super) fn write_output(output: Option<&Path>, bytes: &[u8]) -> IoResult<()> {
    if let Some(path) = output {
        write(path, bytes)?;
        info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    } else {
        let mut stdout = stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()
    }
}
