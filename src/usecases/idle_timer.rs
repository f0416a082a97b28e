//! Single-shot cancelable timer for typing idle expiry.
//!
//! One dedicated thread tracks at most one pending deadline. Arming replaces
//! any pending deadline, canceling clears it, and an expired deadline runs
//! the callback exactly once. The thread stops when the handle is dropped.

use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

const IDLE_TIMER_STARTED: &str = "TYPING_IDLE_TIMER_STARTED";
const IDLE_TIMER_STOPPED: &str = "TYPING_IDLE_TIMER_STOPPED";

enum TimerCommand {
    Arm(Duration),
    Cancel,
    Stop,
}

#[derive(Debug)]
pub struct IdleTimer {
    command_tx: mpsc::Sender<TimerCommand>,
    worker: Option<thread::JoinHandle<()>>,
}

impl IdleTimer {
    /// Spawns the timer thread. `on_expire` runs on that thread whenever an
    /// armed deadline passes without being re-armed or canceled first.
    pub fn start<F>(on_expire: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel();
        let worker = thread::spawn(move || run_timer(command_rx, on_expire));

        tracing::debug!(code = IDLE_TIMER_STARTED, "typing idle timer started");

        Self {
            command_tx,
            worker: Some(worker),
        }
    }

    /// Arms (or re-arms) the single pending deadline.
    pub fn arm(&self, after: Duration) {
        let _ = self.command_tx.send(TimerCommand::Arm(after));
    }

    /// Clears the pending deadline, if any.
    pub fn cancel(&self) {
        let _ = self.command_tx.send(TimerCommand::Cancel);
    }
}

impl Drop for IdleTimer {
    fn drop(&mut self) {
        let _ = self.command_tx.send(TimerCommand::Stop);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        tracing::debug!(code = IDLE_TIMER_STOPPED, "typing idle timer stopped");
    }
}

fn run_timer<F>(command_rx: mpsc::Receiver<TimerCommand>, on_expire: F)
where
    F: Fn(),
{
    let mut deadline: Option<Instant> = None;

    loop {
        let command = match deadline {
            Some(at) => {
                let now = Instant::now();
                if at <= now {
                    on_expire();
                    deadline = None;
                    continue;
                }
                match command_rx.recv_timeout(at - now) {
                    Ok(command) => command,
                    Err(RecvTimeoutError::Timeout) => {
                        on_expire();
                        deadline = None;
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
            None => match command_rx.recv() {
                Ok(command) => command,
                Err(_) => return,
            },
        };

        match command {
            TimerCommand::Arm(after) => deadline = Some(Instant::now() + after),
            TimerCommand::Cancel => deadline = None,
            TimerCommand::Stop => return,
        }
    }
}
