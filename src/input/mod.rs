use crossbeam::channel::{unbounded, Receiver, Sender};
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream was closed")]
    Closed,
    #[error("could not read from input stream")]
    Io(#[source] io::Error),
}

pub type AnswerEvent = Result<String, InputError>;

/// Receiving end of the background line reader.
///
/// Lines are delivered in the order they were typed, one per `recv`, and are
/// buffered while nobody is waiting for them.
pub struct InputFeed {
    receiver: Receiver<AnswerEvent>,
    reader_thread: Option<JoinHandle<()>>,
}

impl InputFeed {
    pub fn receiver(&self) -> &Receiver<AnswerEvent> {
        &self.receiver
    }

    pub fn stop(mut self) {
        let reader_thread = self.reader_thread.take();
        drop(self);
        if let Some(handle) = reader_thread {
            // A reader parked on a terminal read cannot be woken up, leave it detached.
            if handle.is_finished() && handle.join().is_err() {
                log::warn!("Input reader thread panicked");
            }
        }
    }
}

pub struct InputReader;

impl InputReader {
    pub fn start<R>(source: R) -> io::Result<InputFeed>
    where
        R: BufRead + Send + 'static,
    {
        let (sender, receiver) = unbounded();
        let reader_thread = thread::Builder::new()
            .name("input-reader".to_owned())
            .spawn(move || Self::read_lines(source, sender))?;
        Ok(InputFeed {
            receiver,
            reader_thread: Some(reader_thread),
        })
    }

    pub fn stdin() -> io::Result<InputFeed> {
        Self::start(io::BufReader::new(io::stdin()))
    }

    fn read_lines<R: BufRead>(mut source: R, sink: Sender<AnswerEvent>) {
        loop {
            let mut line = String::new();
            let event = match source.read_line(&mut line) {
                Ok(0) => Err(InputError::Closed),
                Ok(_) => {
                    if line.ends_with('\n') {
                        line.pop();
                        if line.ends_with('\r') {
                            line.pop();
                        }
                    }
                    Ok(line)
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => Err(InputError::Io(e)),
            };

            let is_fatal = event.is_err();
            if let Err(e) = &event {
                log::warn!("Input reader stopping: {}", e);
            }
            if sink.send(event).is_err() {
                log::debug!("Input feed dropped, stopping input reader");
                return;
            }
            if is_fatal {
                return;
            }
        }
    }
}
