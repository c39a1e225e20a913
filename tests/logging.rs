use std::io;
use std::sync::{Arc, Mutex};

use gridloop::logging::setup_logging;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_existing_subscriber_is_kept_and_told() {
    let captured = Captured::default();
    let host = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(host).unwrap();

    setup_logging();
    setup_logging();

    let output = captured.contents();
    assert!(output.contains("Global subscriber already installed"), "got: {output}");
    assert_eq!(output.matches("already installed").count(), 1);
}
