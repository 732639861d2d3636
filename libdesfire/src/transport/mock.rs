// libdesfire/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug)]
enum Reply {
    Frame(Vec<u8>),
    Fail(String),
}

/// Mock transport for tests. It records sent frames and returns queued
/// replies in order; once the queue is empty every exchange times out.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    replies: VecDeque<Reply>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock pre-seeded with raw responses.
    pub fn with_responses<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let mut m = Self::new();
        for r in responses {
            m.push_response(r);
        }
        m
    }

    /// Queue a raw response (payload + trailer).
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.replies.push_back(Reply::Frame(resp));
    }

    /// Queue a transport-level failure.
    pub fn push_failure(&mut self, message: &str) {
        self.replies.push_back(Reply::Fail(message.to_string()));
    }

    pub fn pending(&self) -> usize {
        self.replies.len()
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn transceive(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(frame.to_vec());
        match self.replies.pop_front() {
            Some(Reply::Frame(resp)) => Ok(resp),
            Some(Reply::Fail(msg)) => Err(Error::transport(msg)),
            None => Err(Error::Timeout),
        }
    }
}
