use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use toml_edit::{Document, Item, Table};

/// The dependency tables of the Cargo.toml that invoked a proc-macro.
///
/// Generated code must name `vc_value` through whatever the invoking crate
/// actually depends on, which is either the member crate itself or the
/// `vc_notation` facade that re-exports it.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_value"));
/// ```
///
/// # Resolution rules
///
/// 1. `name` listed in `dependencies` resolves to `::name`.
/// 2. `vc_<module>` with the facade `vc_notation` listed resolves to
///    `::vc_notation::<module>` (e.g. `vc_value` -> `::vc_notation::value`).
/// 3. Steps 1-2 are repeated for `dev-dependencies`.
/// 4. Anything else falls back to `::name`.
///
/// A crate naming itself should add `extern crate self as vc_value;` so that
/// the fallback also holds inside its own unit tests.
#[derive(Debug)]
pub struct Manifest {
    dependencies: Vec<Box<str>>,
    dev_dependencies: Vec<Box<str>>,
}

const FACADE_NAME: &str = "vc_notation";
const MEMBER_PREFIX: &str = "vc_";

impl Manifest {
    #[inline(never)]
    fn locate() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    fn table_keys(document: &Document<Box<str>>, table: &str) -> Vec<Box<str>> {
        match document.get(table) {
            Some(Item::Table(deps)) => Self::keys_of(deps),
            _ => Vec::new(),
        }
    }

    fn keys_of(deps: &Table) -> Vec<Box<str>> {
        deps.iter().map(|(key, _)| Box::from(key)).collect()
    }

    #[inline(never)]
    fn load(path: &PathBuf) -> Manifest {
        let parsed = std::fs::read_to_string(path)
            .ok()
            .and_then(|raw| Document::parse(raw.into_boxed_str()).ok());

        match parsed {
            Some(document) => Manifest {
                dependencies: Self::table_keys(&document, "dependencies"),
                dev_dependencies: Self::table_keys(&document, "dev-dependencies"),
            },
            None => Manifest {
                dependencies: Vec::new(),
                dev_dependencies: Vec::new(),
            },
        }
    }

    fn lookup(deps: &[Box<str>], name: &str) -> Option<syn::Path> {
        let listed = |dep: &str| deps.iter().any(|it| &**it == dep);

        if listed(name) {
            return syn::parse_str(&format!("::{name}")).ok();
        }

        let module = name.strip_prefix(MEMBER_PREFIX)?;
        if listed(FACADE_NAME) {
            return syn::parse_str(&format!("::{FACADE_NAME}::{module}")).ok();
        }
        None
    }

    /// Return a [`syn::Path`] naming the crate `name` from the invoking crate.
    /// See the type level documentation for the resolution order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(path) = Self::lookup(&self.dependencies, name) {
            return path;
        }
        if let Some(path) = Self::lookup(&self.dev_dependencies, name) {
            return path;
        }

        syn::parse_str(&format!("::{name}"))
            .unwrap_or_else(|_| panic!("`{name}` is not a valid crate name"))
    }

    /// Run `func` with the [`Manifest`] of the invoking crate.
    ///
    /// Parsed manifests are cached per path for the lifetime of the compiler
    /// process, so calling this once per macro invocation is cheap.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::locate() else {
            let empty = Manifest {
                dependencies: Vec::new(),
                dev_dependencies: Vec::new(),
            };
            return func(&empty);
        };

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path) {
            return func(manifest);
        }
        drop(manifests);

        let manifest = Self::load(&path);
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

