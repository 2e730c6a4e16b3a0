//! Thread-local tape storage and the reverse sweep.
//!
//! Each thread has at most one active [`Tape`]. Operations on
//! [`TapeVar`](super::TapeVar) append one [`Node`] per result, storing the
//! indices of up to two parents together with the local partial derivative
//! with respect to each. The reverse sweep walks the node list backwards and
//! accumulates adjoints.
//!
//! Every tape gets a process-wide unique epoch. A node reference carries the
//! epoch of the tape it was recorded on; references whose epoch does not
//! match the active tape are treated as constants, so values left over from
//! an earlier recording (or sent from another thread) can never alias nodes
//! of the current one.
use crate::tape::errors::{TapeError, TapeResult};
use crate::tape::tape_vec::TapeVec;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_EPOCH: AtomicU32 = AtomicU32::new(1);

thread_local! {
    static ACTIVE_TAPE: RefCell<Option<Tape>> = const { RefCell::new(None) };
}

/// Position of a recorded value on a specific tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef {
    pub epoch: u32,
    pub index: usize,
}

/// One recorded operation: parent indices and local partials.
///
/// Leaves (independent variables) have `arity == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Node {
    parents: [usize; 2],
    partials: [f64; 2],
    arity: u8,
}

impl Node {
    fn add_parent(&mut self, parent: usize, partial: f64) {
        let k = self.arity as usize;
        self.parents[k] = parent;
        self.partials[k] = partial;
        self.arity += 1;
    }
}

/// The operation record of one evaluation.
#[derive(Debug)]
pub struct Tape {
    epoch: u32,
    nodes: TapeVec<Node>,
    independents: TapeVec<usize>,
}

/// Start a fresh tape on this thread and return its epoch.
pub(crate) fn activate() -> TapeResult<u32> {
    ACTIVE_TAPE.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            return Err(TapeError::AlreadyRecording);
        }
        let epoch = NEXT_EPOCH.fetch_add(1, Ordering::Relaxed);
        *slot = Some(Tape { epoch, nodes: TapeVec::new(), independents: TapeVec::new() });
        Ok(epoch)
    })
}

/// Drop the active tape if it is the one identified by `epoch`.
pub(crate) fn deactivate(epoch: u32) {
    ACTIVE_TAPE.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.as_ref().is_some_and(|tape| tape.epoch == epoch) {
            *slot = None;
        }
    });
}

/// Register an independent variable (leaf) on the tape `epoch`.
pub(crate) fn push_independent(epoch: u32) -> TapeResult<NodeRef> {
    with_tape_mut(epoch, |tape| {
        let index = tape.nodes.push(Node::default());
        tape.independents.push(index);
        NodeRef { epoch, index }
    })
}

/// Record an operation with the given `(input, ∂out/∂input)` pairs.
///
/// Inputs that are constants or belong to another tape are skipped. When no
/// input is live (or no tape is active) the result is a constant and `None`
/// is returned without touching the tape.
pub(crate) fn record(inputs: &[(Option<NodeRef>, f64)]) -> Option<NodeRef> {
    if inputs.iter().all(|(input, _)| input.is_none()) {
        return None;
    }
    ACTIVE_TAPE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let tape = slot.as_mut()?;
        let mut node = Node::default();
        for &(input, partial) in inputs {
            if let Some(r) = input {
                if r.epoch == tape.epoch {
                    node.add_parent(r.index, partial);
                }
            }
        }
        if node.arity == 0 {
            return None;
        }
        let index = tape.nodes.push(node);
        Some(NodeRef { epoch: tape.epoch, index })
    })
}

/// Number of nodes on tape `epoch`.
pub(crate) fn node_count(epoch: u32) -> TapeResult<usize> {
    with_tape(epoch, |tape| tape.nodes.len())
}

/// Number of registered independents on tape `epoch`.
pub(crate) fn independent_count(epoch: u32) -> TapeResult<usize> {
    with_tape(epoch, |tape| tape.independents.len())
}

/// Reverse sweep from `output`; returns `∂output/∂independent` in
/// registration order.
pub(crate) fn gradient(epoch: u32, output: Option<NodeRef>) -> TapeResult<TapeVec<f64>> {
    let output = match output {
        Some(r) if r.epoch != epoch => {
            return Err(TapeError::ForeignVariable { expected_epoch: epoch, found_epoch: r.epoch });
        }
        other => other,
    };
    with_tape(epoch, |tape| {
        let mut grad = TapeVec::with_len(tape.independents.len());
        let Some(out) = output else {
            return grad;
        };
        let mut adjoint: TapeVec<f64> = TapeVec::with_len(tape.nodes.len());
        adjoint[out.index] = 1.0;
        for i in (0..=out.index).rev() {
            let a = adjoint[i];
            if a == 0.0 {
                continue;
            }
            let node = tape.nodes[i];
            for k in 0..node.arity as usize {
                adjoint[node.parents[k]] += a * node.partials[k];
            }
        }
        for (j, &leaf) in tape.independents.iter().enumerate() {
            grad[j] = adjoint[leaf];
        }
        grad
    })
}

fn with_tape<R>(epoch: u32, f: impl FnOnce(&Tape) -> R) -> TapeResult<R> {
    ACTIVE_TAPE.with(|cell| {
        let slot = cell.borrow();
        match slot.as_ref() {
            Some(tape) if tape.epoch == epoch => Ok(f(tape)),
            _ => Err(TapeError::NotRecording),
        }
    })
}

fn with_tape_mut<R>(epoch: u32, f: impl FnOnce(&mut Tape) -> R) -> TapeResult<R> {
    ACTIVE_TAPE.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            Some(tape) if tape.epoch == epoch => Ok(f(tape)),
            _ => Err(TapeError::NotRecording),
        }
    })
}
