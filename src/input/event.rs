use crossterm::event::{self as crossterm_event, Event as CrosstermEvent, KeyEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, Sender};
use tokio::time::{interval, Duration};

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    Line(String),
    InputClosed,
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    shutdown_tx: Vec<Sender<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let mut handler = Self::detached();
        handler.spawn_terminal_input();
        handler.spawn_ticker(tick_rate);
        handler
    }

    /// Handler without terminal or tick sources.
    fn detached() -> Self {
        let (tx, rx) = mpsc::channel(256);
        Self {
            rx,
            tx,
            shutdown_tx: Vec::new(),
        }
    }

    fn spawn_terminal_input(&mut self) {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        self.shutdown_tx.push(shutdown_tx);

        let input_tx = self.tx.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    polled = tokio::task::spawn_blocking(|| {
                        match crossterm_event::poll(Duration::from_millis(100)) {
                            Ok(true) => crossterm_event::read().map(Some),
                            Ok(false) => Ok(None),
                            Err(e) => Err(e),
                        }
                    }) => {
                        let event = match polled {
                            Ok(Ok(Some(event))) => event,
                            Ok(Ok(None)) => continue,
                            Ok(Err(e)) => {
                                log::error!("Terminal event error: {}", e);
                                break;
                            }
                            Err(e) => {
                                log::error!("Terminal event task failed: {}", e);
                                break;
                            }
                        };
                        let app_event = match event {
                            CrosstermEvent::Key(key) => AppEvent::Input(key),
                            CrosstermEvent::Resize(width, height) => AppEvent::Resize(width, height),
                            _ => continue,
                        };
                        if input_tx.send(app_event).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }

    fn spawn_ticker(&mut self, tick_rate: Duration) {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        self.shutdown_tx.push(shutdown_tx);

        let tick_tx = self.tx.clone();
        tokio::spawn(async move {
            let mut interval = interval(tick_rate);
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = interval.tick() => {
                        if tick_tx.send(AppEvent::Tick).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }

    /// Forwards every line of `reader` as [`AppEvent::Line`], then sends
    /// [`AppEvent::InputClosed`]. Invalid UTF-8 is replaced, not fatal.
    pub fn spawn_line_source<R>(&mut self, reader: R)
    where
        R: tokio::io::AsyncRead + Unpin + Send + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);
        self.shutdown_tx.push(shutdown_tx);

        let line_tx = self.tx.clone();
        tokio::spawn(async move {
            let mut reader = BufReader::new(reader);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                tokio::select! {
                    _ = shutdown_rx.recv() => return,
                    read = reader.read_until(b'\n', &mut buf) => match read {
                        Ok(0) => break,
                        Ok(_) => {
                            if line_tx.send(AppEvent::Line(decode_line(&buf))).await.is_err() {
                                return;
                            }
                        }
                        Err(e) => {
                            log::warn!("Line source failed: {}", e);
                            break;
                        }
                    }
                }
            }
            let _ = line_tx.send(AppEvent::InputClosed).await;
        });
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub async fn shutdown(&mut self) {
        for tx in self.shutdown_tx.iter() {
            let _ = tx.send(()).await;
        }
    }
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
