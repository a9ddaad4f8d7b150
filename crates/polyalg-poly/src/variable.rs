//! Indeterminates and the id registry.
//!
//! Every variable carries an integer id that is unique for the lifetime of
//! the registry it came from. The process-wide registry sits behind a
//! single mutex; allocation is the only operation that writes to it.

use parking_lot::{const_mutex, Mutex};
use std::collections::BTreeSet;
use std::fmt;
use tracing::trace;

use polyalg_rings::Scalar;

use crate::calculus::Bindings;
use crate::monomial::Monomial;
use crate::value::Value;

/// Allocator for variable ids.
///
/// A new id is the smallest id not yet registered that is at least the
/// current candidate. After allocation the candidate skips over any
/// contiguous run of registered ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableRegistry {
    ids: BTreeSet<u32>,
    next: u32,
}

impl VariableRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
            next: 0,
        }
    }

    /// Allocates a fresh id.
    pub fn allocate(&mut self) -> u32 {
        let mut id = self.next;
        while self.ids.contains(&id) {
            id += 1;
        }
        self.ids.insert(id);

        self.next = id;
        while self.ids.contains(&self.next) {
            self.next += 1;
        }

        trace!(id, next = self.next, "allocated variable id");
        id
    }

    /// Marks an id as used without allocating it.
    ///
    /// Returns false if the id was already registered.
    pub fn reserve(&mut self, id: u32) -> bool {
        let inserted = self.ids.insert(id);
        while self.ids.contains(&self.next) {
            self.next += 1;
        }
        inserted
    }

    /// Removes an id so that a later allocation may hand it out again.
    ///
    /// The candidate counter is left where it is: a released id is only
    /// reused once the counter has not yet moved past it.
    pub fn release(&mut self, id: u32) -> bool {
        let removed = self.ids.remove(&id);
        if removed {
            trace!(id, "released variable id");
        }
        removed
    }

    /// Returns true if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Number of registered ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The id the next allocation starts scanning from.
    #[must_use]
    pub fn next_candidate(&self) -> u32 {
        self.next
    }
}

static GLOBAL_REGISTRY: Mutex<VariableRegistry> = const_mutex(VariableRegistry::new());

/// Runs `f` with exclusive access to the process-wide registry.
pub fn with_global_registry<T>(f: impl FnOnce(&mut VariableRegistry) -> T) -> T {
    let mut registry = GLOBAL_REGISTRY.lock();
    f(&mut registry)
}

/// Snapshot of the ids held by the process-wide registry, ascending.
#[must_use]
pub fn registered_ids() -> Vec<u32> {
    with_global_registry(|registry| registry.ids().collect())
}

/// An indeterminate identified by its id.
///
/// Equality and order are those of the id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Variable {
    id: u32,
}

impl Variable {
    /// Allocates a new variable from the process-wide registry.
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            id: with_global_registry(VariableRegistry::allocate),
        }
    }

    /// Allocates a new variable from an explicit registry.
    #[must_use]
    pub fn new_in(registry: &mut VariableRegistry) -> Self {
        Self {
            id: registry.allocate(),
        }
    }

    /// Refers to the variable with the given id without touching any registry.
    #[must_use]
    pub const fn from_id(id: u32) -> Self {
        Self { id }
    }

    /// Returns the id.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.id
    }

    /// The id as an index into exponent vectors.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.id as usize
    }

    /// The monomial `v^e`.
    #[must_use]
    pub fn pow(self, e: u32) -> Monomial {
        let mut exponents = vec![0; self.index() + 1];
        exponents[self.index()] = e;
        Monomial::from_exponents(Scalar::ONE, &exponents)
    }

    /// Substitutes a bound value, or returns the variable itself.
    #[must_use]
    pub fn eval(self, bindings: &Bindings) -> Value {
        match bindings.get(&self.id) {
            Some(&value) => Value::Scalar(value),
            None => Value::Variable(self),
        }
    }

    /// Evaluates with positional arguments bound to ids `0..args.len()`.
    #[must_use]
    pub fn call(self, args: &[Scalar]) -> Value {
        self.eval(&crate::calculus::positional_bindings(args))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x_{}", self.id)
    }
}
