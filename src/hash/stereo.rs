//! Stereochemistry encoder contract.
//!
//! Stereo perception itself lives outside this crate. A stereo encoder is a
//! stateful collaborator that inspects the current invariants, writes
//! adjusted values into `next`, and reports whether anything changed; the
//! refinement engines drive it to a fixed point before and between
//! propagation rounds. Encoders must converge when repeatedly invoked on
//! unchanged input — that is a precondition of the contract, not something
//! the engines enforce.

use crate::mol::Mol;

pub trait StereoEncoder {
    /// Encode stereo configuration into `next` given the `current`
    /// invariants. Returns `true` if any value changed.
    fn encode(&mut self, current: &[u64], next: &mut [u64]) -> bool;

    /// Discard any internal state so the encoder can rerun from scratch on
    /// perturbed seeds.
    fn reset(&mut self);
}

/// Creates a fresh encoder per generate call.
///
/// Encoders mutate internal state; sharing one across concurrent calls is
/// not allowed, so generators hold a factory rather than an encoder.
pub trait StereoEncoderFactory<A, B> {
    fn create(&self, mol: &Mol<A, B>, graph: &[Vec<usize>]) -> Box<dyn StereoEncoder>;
}

/// Encoder for achiral input: never changes anything.
pub struct EmptyStereoEncoder;

impl StereoEncoder for EmptyStereoEncoder {
    fn encode(&mut self, _current: &[u64], _next: &mut [u64]) -> bool {
        false
    }

    fn reset(&mut self) {}
}

/// Factory producing [`EmptyStereoEncoder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStereoEncoderFactory;

impl<A, B> StereoEncoderFactory<A, B> for EmptyStereoEncoderFactory {
    fn create(&self, _mol: &Mol<A, B>, _graph: &[Vec<usize>]) -> Box<dyn StereoEncoder> {
        Box::new(EmptyStereoEncoder)
    }
}

/// Composes several encoders by sequential application, OR-ing their
/// changed flags.
pub struct MultiStereoEncoder {
    encoders: Vec<Box<dyn StereoEncoder>>,
}

impl MultiStereoEncoder {
    pub fn new(encoders: Vec<Box<dyn StereoEncoder>>) -> Self {
        Self { encoders }
    }
}

impl StereoEncoder for MultiStereoEncoder {
    fn encode(&mut self, current: &[u64], next: &mut [u64]) -> bool {
        let mut changed = false;
        for encoder in &mut self.encoders {
            changed |= encoder.encode(current, next);
        }
        changed
    }

    fn reset(&mut self) {
        for encoder in &mut self.encoders {
            encoder.reset();
        }
    }
}
