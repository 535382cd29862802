//! Process-wide unit registry and identity resolver.
//!
//! Two jobs live here:
//!
//! 1. **Base-unit registration.** Each distinct axis of measurement gets a
//!    [`BaseUnitId`] the first time it is registered; ids increase
//!    monotonically and the resulting order is the sort key for canonical
//!    vectors. Registration is idempotent by name, so concurrent registration
//!    of the same axis converges on one id.
//! 2. **Identity resolution.** [`resolve`] maps a canonical [`DimVec`] to the
//!    representation values of that dimension should carry: the dimensionless
//!    identity for the empty vector, the originating base unit for a pure
//!    vector (so `Distance * Time / Time` normalizes back to exactly
//!    `Distance`), and a memoized composite handle for anything else — two
//!    independently-derived equal dimensions always share one handle.
//!
//! Composites can be given a human name and symbol up front via
//! [`alias_composite`]; otherwise a symbol is synthesized from the component
//! base units (`m·s^-2`).
//!
//! ```rust
//! use dimvec_core::{registry, DimVec, Dimension, UnitRepr};
//!
//! let amp = registry::register_base("Current", "A");
//! assert_eq!(registry::register_base("Current", "A"), amp);
//!
//! let pure = DimVec::single(Dimension::new(amp, 1));
//! assert_eq!(registry::resolve(&pure), UnitRepr::Base(amp));
//! assert_eq!(registry::resolve(&DimVec::empty()), UnitRepr::Identity);
//! ```

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::dimension::BaseUnitId;
use crate::vector::DimVec;

/// Handle of a memoized composite representation.
///
/// Created once per distinct canonical vector; equal handles mean equal
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeId(u32);

impl CompositeId {
    /// Zero-based creation index of this composite.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// The canonical representation for a dimension vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitRepr {
    /// The dimensionless identity; behaves as a bare scalar.
    Identity,
    /// A pure vector's own base unit.
    Base(BaseUnitId),
    /// A synthesized composite, memoized per distinct vector.
    Composite(CompositeId),
}

#[derive(Debug, Clone)]
struct BaseUnitInfo {
    name: String,
    symbol: String,
}

#[derive(Debug, Clone)]
struct CompositeInfo {
    dims: DimVec,
    name: Option<String>,
    symbol: String,
}

#[derive(Debug, Clone)]
struct Alias {
    name: String,
    symbol: String,
}

#[derive(Debug, Default)]
struct Registry {
    bases: Vec<BaseUnitInfo>,
    base_by_name: HashMap<String, BaseUnitId>,
    composites: Vec<CompositeInfo>,
    composite_by_dims: HashMap<DimVec, CompositeId>,
    aliases: HashMap<DimVec, Alias>,
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(Default::default);

// A poisoned lock only means another thread panicked mid-read of plain data;
// the registry is append-only, so the contents are still consistent.
fn read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read().unwrap_or_else(|e| e.into_inner())
}

fn write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(|e| e.into_inner())
}

/// Registers a base unit, returning its process-wide id.
///
/// Idempotent: the first call for a given `name` assigns the next id, later
/// calls return the same id regardless of `symbol`.
pub fn register_base(name: &str, symbol: &str) -> BaseUnitId {
    if let Some(&id) = read().base_by_name.get(name) {
        return id;
    }
    let mut reg = write();
    // Double-check: another thread may have registered between the locks.
    if let Some(&id) = reg.base_by_name.get(name) {
        return id;
    }
    let id = BaseUnitId(reg.bases.len() as u32);
    reg.bases.push(BaseUnitInfo {
        name: name.to_owned(),
        symbol: symbol.to_owned(),
    });
    reg.base_by_name.insert(name.to_owned(), id);
    log::debug!("registered base unit {name} ({symbol}) as #{}", id.index());
    id
}

/// Name of a registered base unit.
pub fn base_name(id: BaseUnitId) -> Option<String> {
    read().bases.get(id.index() as usize).map(|b| b.name.clone())
}

/// Printable symbol of a registered base unit.
pub fn base_symbol(id: BaseUnitId) -> Option<String> {
    read()
        .bases
        .get(id.index() as usize)
        .map(|b| b.symbol.clone())
}

/// Resolves a canonical vector to its representation.
///
/// Composite creation is an insert-if-absent under the registry's write lock,
/// so concurrent first-time resolution of the same vector converges on a
/// single handle.
pub fn resolve(dims: &DimVec) -> UnitRepr {
    if dims.is_empty() {
        return UnitRepr::Identity;
    }
    if dims.is_pure() {
        let only = dims.first().expect("is_pure guarantees a single element");
        return UnitRepr::Base(only.unit());
    }
    if let Some(&id) = read().composite_by_dims.get(dims) {
        return UnitRepr::Composite(id);
    }
    let mut reg = write();
    if let Some(&id) = reg.composite_by_dims.get(dims) {
        return UnitRepr::Composite(id);
    }
    let (name, symbol) = match reg.aliases.get(dims) {
        Some(alias) => (Some(alias.name.clone()), alias.symbol.clone()),
        None => (None, synthesize_symbol(dims, &reg.bases)),
    };
    let id = CompositeId(reg.composites.len() as u32);
    log::debug!("created composite unit {symbol} as @{}", id.index());
    reg.composites.push(CompositeInfo {
        dims: dims.clone(),
        name,
        symbol,
    });
    reg.composite_by_dims.insert(dims.clone(), id);
    UnitRepr::Composite(id)
}

/// Attaches a human name and symbol to a composite dimension.
///
/// Applied when the vector is resolved; re-aliasing an already-resolved
/// vector updates the existing composite in place. Aliases affect only
/// presentation, never the algebra.
pub fn alias_composite(dims: &DimVec, name: &str, symbol: &str) {
    let mut reg = write();
    reg.aliases.insert(
        dims.clone(),
        Alias {
            name: name.to_owned(),
            symbol: symbol.to_owned(),
        },
    );
    if let Some(&id) = reg.composite_by_dims.get(dims) {
        let info = &mut reg.composites[id.index() as usize];
        info.name = Some(name.to_owned());
        info.symbol = symbol.to_owned();
    }
}

/// The canonical vector a composite was created for.
pub fn composite_dims(id: CompositeId) -> Option<DimVec> {
    read()
        .composites
        .get(id.index() as usize)
        .map(|c| c.dims.clone())
}

/// Alias name of a composite, if one was registered.
pub fn composite_name(id: CompositeId) -> Option<String> {
    read()
        .composites
        .get(id.index() as usize)
        .and_then(|c| c.name.clone())
}

/// Printable symbol of a composite (aliased or synthesized).
pub fn composite_symbol(id: CompositeId) -> Option<String> {
    read()
        .composites
        .get(id.index() as usize)
        .map(|c| c.symbol.clone())
}

/// Printable symbol for any representation; empty for the identity.
pub fn symbol_of(repr: UnitRepr) -> String {
    match repr {
        UnitRepr::Identity => String::new(),
        UnitRepr::Base(id) => base_symbol(id).unwrap_or_default(),
        UnitRepr::Composite(id) => composite_symbol(id).unwrap_or_default(),
    }
}

fn synthesize_symbol(dims: &DimVec, bases: &[BaseUnitInfo]) -> String {
    let parts: Vec<String> = dims
        .iter()
        .map(|d| {
            let sym = bases
                .get(d.unit().index() as usize)
                .map(|b| b.symbol.as_str())
                .unwrap_or("?");
            if d.rank() == 1 {
                sym.to_owned()
            } else {
                format!("{}^{}", sym, d.rank())
            }
        })
        .collect();
    parts.join("·")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    fn vec_of(parts: &[(BaseUnitId, i16)]) -> DimVec {
        DimVec::new(parts.iter().map(|&(u, r)| Dimension::new(u, r)))
    }

    #[test]
    fn registration_is_idempotent() {
        let a = register_base("reg-test-idem", "rti");
        let b = register_base("reg-test-idem", "rti");
        assert_eq!(a, b);
        assert_eq!(base_name(a).as_deref(), Some("reg-test-idem"));
        assert_eq!(base_symbol(a).as_deref(), Some("rti"));
    }

    #[test]
    fn distinct_names_get_increasing_ids() {
        let a = register_base("reg-test-ord-a", "roa");
        let b = register_base("reg-test-ord-b", "rob");
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn empty_resolves_to_identity() {
        assert_eq!(resolve(&DimVec::empty()), UnitRepr::Identity);
        assert_eq!(symbol_of(UnitRepr::Identity), "");
    }

    #[test]
    fn pure_resolves_to_its_base_unit() {
        let u = register_base("reg-test-pure", "rp");
        let v = vec_of(&[(u, 1)]);
        assert_eq!(resolve(&v), UnitRepr::Base(u));
        // Rank != 1 is not pure and must synthesize.
        let sq = vec_of(&[(u, 2)]);
        assert!(matches!(resolve(&sq), UnitRepr::Composite(_)));
    }

    #[test]
    fn composites_are_memoized() {
        let u = register_base("reg-test-memo-a", "rma");
        let w = register_base("reg-test-memo-b", "rmb");
        let v1 = vec_of(&[(u, 1), (w, -2)]);
        let v2 = vec_of(&[(w, -2), (u, 1)]);
        assert_eq!(resolve(&v1), resolve(&v2));
    }

    #[test]
    fn derivation_path_does_not_matter() {
        let u = register_base("reg-test-path-a", "rpa");
        let w = register_base("reg-test-path-b", "rpb");
        let direct = vec_of(&[(u, 1), (w, -1)]);
        let derived = vec_of(&[(u, 1)]).divide(&vec_of(&[(w, 1)]));
        assert_eq!(resolve(&direct), resolve(&derived));
    }

    #[test]
    fn synthesized_symbol_lists_components() {
        let u = register_base("reg-test-sym-a", "rsa");
        let w = register_base("reg-test-sym-b", "rsb");
        let v = vec_of(&[(u, 1), (w, -2)]);
        let UnitRepr::Composite(id) = resolve(&v) else {
            panic!("expected a composite");
        };
        assert_eq!(composite_symbol(id).as_deref(), Some("rsa·rsb^-2"));
        assert_eq!(composite_dims(id).as_ref(), Some(&v));
        assert_eq!(composite_name(id), None);
    }

    #[test]
    fn alias_applies_at_resolution() {
        let u = register_base("reg-test-alias-a", "raa");
        let w = register_base("reg-test-alias-b", "rab");
        let v = vec_of(&[(u, 1), (w, -1)]);
        alias_composite(&v, "Pace", "raa/rab");
        let UnitRepr::Composite(id) = resolve(&v) else {
            panic!("expected a composite");
        };
        assert_eq!(composite_name(id).as_deref(), Some("Pace"));
        assert_eq!(composite_symbol(id).as_deref(), Some("raa/rab"));
    }

    #[test]
    fn alias_updates_existing_composite() {
        let u = register_base("reg-test-realias-a", "rra");
        let w = register_base("reg-test-realias-b", "rrb");
        let v = vec_of(&[(u, 2), (w, 1)]);
        let first = resolve(&v);
        alias_composite(&v, "Named", "nm");
        assert_eq!(resolve(&v), first);
        let UnitRepr::Composite(id) = first else {
            panic!("expected a composite");
        };
        assert_eq!(composite_symbol(id).as_deref(), Some("nm"));
    }

    #[test]
    fn concurrent_resolution_converges() {
        use std::thread;

        let u = register_base("reg-test-conc-a", "rca");
        let w = register_base("reg-test-conc-b", "rcb");
        let v = vec_of(&[(u, 3), (w, -1)]);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let v = v.clone();
                thread::spawn(move || resolve(&v))
            })
            .collect();
        let reprs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(reprs.windows(2).all(|p| p[0] == p[1]));
    }

    #[test]
    fn concurrent_registration_converges() {
        use std::thread;

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| register_base("reg-test-conc-reg", "rcr")))
            .collect();
        let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ids.windows(2).all(|p| p[0] == p[1]));
    }
}
