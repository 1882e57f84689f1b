use crate::events::IBCEvent;
use std::marker::PhantomData;

pub type HandlerResult<T, E> = Result<HandlerOutput<T>, E>;

/// The outcome of processing a message: the state transition to apply (`result`), along with
/// human readable log lines and the events to publish once the transition is committed.
#[derive(Clone, Debug)]
pub struct HandlerOutput<T> {
    pub result: T,
    pub log: Vec<String>,
    pub events: Vec<IBCEvent>,
}

impl<T> HandlerOutput<T> {
    pub fn builder() -> HandlerOutputBuilder<T> {
        HandlerOutputBuilder::new()
    }
}

#[derive(Clone, Debug)]
pub struct HandlerOutputBuilder<T> {
    log: Vec<String>,
    events: Vec<IBCEvent>,
    marker: PhantomData<T>,
}

impl<T> HandlerOutputBuilder<T> {
    pub fn new() -> Self {
        Self {
            log: vec![],
            events: vec![],
            marker: PhantomData,
        }
    }

    pub fn log(&mut self, log: impl Into<String>) {
        self.log.push(log.into());
    }

    pub fn emit(&mut self, event: IBCEvent) {
        self.events.push(event);
    }

    pub fn with_result(self, result: T) -> HandlerOutput<T> {
        HandlerOutput {
            result,
            log: self.log,
            events: self.events,
        }
    }
}

impl<T> Default for HandlerOutputBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
