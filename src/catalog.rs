//! Named-curve catalog combining built-in presets with user curves.
//!
//! [`Catalog`] is built once from a [`Config`] and never mutated.  User
//! curves shadow built-in presets of the same name.

use crate::bezier::CubicBezier;
use crate::config::Config;
use crate::preset::{BuiltinPresets, Preset};
use crate::traits::CurveCatalog;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Errors from [`Catalog::resolve`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown curve: {0:?}")]
    UnknownCurve(String),
    #[error("malformed curve {0:?}: expected \"x1,y1,x2,y2\"")]
    Malformed(String),
}

/// Built-in presets plus user-defined curves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    custom: BTreeMap<String, CubicBezier>,
}

impl Catalog {
    /// A catalog holding only the built-in presets.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Build a catalog from the `curves` section of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_curves(config.curves.clone())
    }

    /// Build a catalog from an explicit set of user curves.
    pub fn with_curves(custom: BTreeMap<String, CubicBezier>) -> Self {
        for (name, curve) in &custom {
            if Preset::from_name(name).is_some() {
                warn!("curve {:?} shadows the built-in preset of the same name", name);
            }
            if !curve.is_monotonic() {
                warn!(
                    "curve {:?} ({}) has x control points outside [0, 1]; solving may be ambiguous",
                    name, curve
                );
            }
        }
        debug!("catalog: {} built-in, {} user curve(s)", Preset::ALL.len(), custom.len());
        Self { custom }
    }

    /// Turn a curve reference into coefficients.
    ///
    /// `curve` is either a catalog name or four comma-separated numbers
    /// `"x1,y1,x2,y2"` (whitespace around each number is ignored).
    pub fn resolve(&self, curve: &str) -> Result<CubicBezier, ResolveError> {
        let curve = curve.trim();
        if let Some(found) = self.lookup(curve) {
            return Ok(found);
        }
        if curve.contains(',') {
            return parse_inline(curve).ok_or_else(|| ResolveError::Malformed(curve.to_string()));
        }
        Err(ResolveError::UnknownCurve(curve.to_string()))
    }
}

/// Parse `"x1,y1,x2,y2"`.
fn parse_inline(s: &str) -> Option<CubicBezier> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [x1, y1, x2, y2] => Some(CubicBezier::new(*x1, *y1, *x2, *y2)),
        _ => None,
    }
}

impl CurveCatalog for Catalog {
    fn lookup(&self, name: &str) -> Option<CubicBezier> {
        self.custom
            .get(name)
            .copied()
            .or_else(|| BuiltinPresets.lookup(name))
    }

    /// Built-in names first (catalog order), then user names not already
    /// listed, alphabetically.
    fn names(&self) -> Vec<String> {
        let mut names = BuiltinPresets.names();
        names.extend(
            self.custom
                .keys()
                .filter(|k| Preset::from_name(k).is_none())
                .cloned(),
        );
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_snappy() -> Catalog {
        let mut curves = BTreeMap::new();
        curves.insert("Snappy".to_string(), CubicBezier::new(0.2, 0.0, 0.0, 1.0));
        Catalog::with_curves(curves)
    }

    #[test]
    fn builtin_resolves_presets() {
        let cat = Catalog::builtin();
        assert_eq!(cat.resolve("EaseOutBack"), Ok(Preset::EaseOutBack.curve()));
        assert_eq!(cat.names().len(), Preset::ALL.len());
    }

    #[test]
    fn resolve_trims_whitespace() {
        let cat = Catalog::builtin();
        assert_eq!(cat.resolve("  Linear \n"), Ok(Preset::Linear.curve()));
    }

    #[test]
    fn resolve_custom_curve() {
        let cat = with_snappy();
        assert_eq!(cat.resolve("Snappy"), Ok(CubicBezier::new(0.2, 0.0, 0.0, 1.0)));
        assert!(cat.contains("Linear"));
    }

    #[test]
    fn custom_shadows_builtin() {
        let mut curves = BTreeMap::new();
        curves.insert("Linear".to_string(), CubicBezier::new(0.0, 0.0, 1.0, 1.0));
        let cat = Catalog::with_curves(curves);
        assert_eq!(cat.lookup("Linear"), Some(CubicBezier::new(0.0, 0.0, 1.0, 1.0)));
        // Shadowed names are listed once.
        assert_eq!(cat.names().iter().filter(|n| *n == "Linear").count(), 1);
    }

    #[test]
    fn resolve_inline_coefficients() {
        let cat = Catalog::builtin();
        assert_eq!(
            cat.resolve("0.25, 0.1, 0.25, 1"),
            Ok(CubicBezier::new(0.25, 0.1, 0.25, 1.0))
        );
        assert_eq!(cat.resolve("-.6,0,1,1.5"), Ok(CubicBezier::new(-0.6, 0.0, 1.0, 1.5)));
    }

    #[test]
    fn resolve_malformed_inline() {
        let cat = Catalog::builtin();
        assert_eq!(
            cat.resolve("0.1,0.2,0.3"),
            Err(ResolveError::Malformed("0.1,0.2,0.3".into()))
        );
        assert_eq!(
            cat.resolve("0.1,a,0.3,0.4"),
            Err(ResolveError::Malformed("0.1,a,0.3,0.4".into()))
        );
    }

    #[test]
    fn resolve_unknown_name() {
        let cat = Catalog::builtin();
        assert_eq!(
            cat.resolve("NoSuchCurve"),
            Err(ResolveError::UnknownCurve("NoSuchCurve".into()))
        );
    }

    #[test]
    fn names_list_builtins_then_custom() {
        let names = with_snappy().names();
        assert_eq!(names.len(), Preset::ALL.len() + 1);
        assert_eq!(names[0], "Constant");
        assert_eq!(names.last().map(String::as_str), Some("Snappy"));
    }

    #[test]
    fn from_config_uses_curves_section() {
        let cfg = Config::from_json(r#"{ "curves": { "Alias": "EaseInQuad" } }"#).unwrap();
        let cat = Catalog::from_config(&cfg);
        assert_eq!(cat.lookup("Alias"), Some(Preset::EaseInQuad.curve()));
    }

    #[test]
    fn catalog_is_shareable_across_threads() {
        let cat = std::sync::Arc::new(with_snappy());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cat = cat.clone();
                std::thread::spawn(move || {
                    let curve = cat.resolve("Snappy").unwrap();
                    curve.evaluate(i as f64 / 4.0).unwrap()
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap().is_finite());
        }
    }
}
