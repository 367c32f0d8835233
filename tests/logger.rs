use logx::{Level, Leveled, Logger};
use std::cell::Cell;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;

/// Sink several loggers can write to at once.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink taking one byte per `write`, so a line reaches it in many calls.
#[derive(Clone, Default)]
struct ByteSink(Arc<Mutex<Vec<u8>>>);

impl ByteSink {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for ByteSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(&byte) = buf.first() else {
            return Ok(0);
        };
        self.0.lock().unwrap().push(byte);
        thread::yield_now();
        Ok(1)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_debug_utc_logger() {
    let buf = SharedBuf::default();
    let lgr = Logger::new(buf.clone(), Level::Debug, false).unwrap();

    logx::info!(lgr, "hello {}", "world");
    let text = buf.text();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("UTC [INFO]  "), "{text:?}");
    assert!(text.contains("hello world"), "{text:?}");

    logx::fine!(lgr, "not {}", "written");
    assert_eq!(buf.text(), text);
}

#[test]
fn test_error_local_time_logger() {
    let buf = SharedBuf::default();
    let lgr = Logger::new(buf.clone(), Level::Error, true).unwrap();

    logx::warn!(lgr, "ignored");
    assert!(buf.text().is_empty());

    logx::error!(lgr, "boom");
    let text = buf.text();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("[ERROR]"), "{text:?}");
    assert!(text.contains("boom"), "{text:?}");
    assert!(!text.contains("UTC "), "{text:?}");
}

#[test]
fn test_generic_log_macro() {
    let buf = SharedBuf::default();
    let lgr = Logger::new(buf.clone(), Level::Warn, false).unwrap();

    logx::log!(lgr, Level::Info, "dropped");
    logx::log!(lgr, Level::Off, "dropped");
    logx::log!(lgr, Level::Warn, "{} of {}", 3, 4);
    assert!(buf.text().ends_with("UTC [WARN]  3 of 4\n"));
}

#[test]
fn test_loggers_share_a_sink_independently() {
    let buf = SharedBuf::default();
    let verbose = Logger::new(buf.clone(), Level::Fine, false).unwrap();
    let quiet = Logger::new(buf.clone(), Level::Error, true).unwrap();

    logx::fine!(verbose, "one");
    logx::fine!(quiet, "two");
    logx::error!(quiet, "three");

    let text = buf.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("UTC [FINE]  one"));
    assert!(lines[1].ends_with(" [ERROR] three"));
    assert!(!lines[1].contains("UTC "));
}

#[test]
fn test_lazy_message_counts_calls() {
    let buf = SharedBuf::default();
    let lgr = Logger::new(buf.clone(), Level::Info, false).unwrap();
    let calls = Cell::new(0);
    let produce = || {
        calls.set(calls.get() + 1);
        format!("call {}", calls.get())
    };

    for level in Level::ACTIVE {
        lgr.log_with(level, produce);
    }
    assert_eq!(calls.get(), 3);
    assert_eq!(buf.text().lines().count(), 3);

    let disabled: Option<Logger<SharedBuf>> = None;
    disabled.log_with(Level::Error, produce);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_concurrent_lines_do_not_interleave() {
    const THREADS: usize = 8;
    const LINES: usize = 50;

    let sink = ByteSink::default();
    let lgr = Arc::new(Logger::new(sink.clone(), Level::Fine, false).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let lgr = Arc::clone(&lgr);
            thread::spawn(move || {
                let fill = t.to_string().repeat(40);
                for i in 0..LINES {
                    logx::info!(*lgr, "thread {t} line {i} {fill}");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let text = sink.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES);
    for line in lines {
        let (_, message) = line
            .split_once(" UTC [INFO]  thread ")
            .unwrap_or_else(|| panic!("broken line {line:?}"));
        let t = &message[..1];
        assert_eq!(line.matches("UTC ").count(), 1, "{line:?}");
        assert!(line.ends_with(&format!(" {}", t.repeat(40))), "{line:?}");
    }
}
