//! Built-in easing presets.
//!
//! Coefficients follow the reference curves at <https://easings.net/>.
//! Elastic and bounce easings are absent: neither can be expressed as a
//! single cubic Bézier with a monotonic x-component.

use crate::bezier::CubicBezier;
use crate::traits::CurveCatalog;
use std::fmt;

/// Every named built-in curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Step curve.  Its y-coefficients are `-∞` and `+∞`, so sampled y
    /// values are not finite.
    Constant,
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
}

impl Preset {
    /// All presets in catalog order.
    pub const ALL: [Preset; 26] = [
        Preset::Constant,
        Preset::Linear,
        Preset::EaseInSine,
        Preset::EaseOutSine,
        Preset::EaseInOutSine,
        Preset::EaseInQuad,
        Preset::EaseOutQuad,
        Preset::EaseInOutQuad,
        Preset::EaseInCubic,
        Preset::EaseOutCubic,
        Preset::EaseInOutCubic,
        Preset::EaseInQuart,
        Preset::EaseOutQuart,
        Preset::EaseInOutQuart,
        Preset::EaseInQuint,
        Preset::EaseOutQuint,
        Preset::EaseInOutQuint,
        Preset::EaseInExpo,
        Preset::EaseOutExpo,
        Preset::EaseInOutExpo,
        Preset::EaseInCirc,
        Preset::EaseOutCirc,
        Preset::EaseInOutCirc,
        Preset::EaseInBack,
        Preset::EaseOutBack,
        Preset::EaseInOutBack,
    ];

    /// The catalog name, e.g. `"EaseInOutBack"`.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Constant => "Constant",
            Preset::Linear => "Linear",
            Preset::EaseInSine => "EaseInSine",
            Preset::EaseOutSine => "EaseOutSine",
            Preset::EaseInOutSine => "EaseInOutSine",
            Preset::EaseInQuad => "EaseInQuad",
            Preset::EaseOutQuad => "EaseOutQuad",
            Preset::EaseInOutQuad => "EaseInOutQuad",
            Preset::EaseInCubic => "EaseInCubic",
            Preset::EaseOutCubic => "EaseOutCubic",
            Preset::EaseInOutCubic => "EaseInOutCubic",
            Preset::EaseInQuart => "EaseInQuart",
            Preset::EaseOutQuart => "EaseOutQuart",
            Preset::EaseInOutQuart => "EaseInOutQuart",
            Preset::EaseInQuint => "EaseInQuint",
            Preset::EaseOutQuint => "EaseOutQuint",
            Preset::EaseInOutQuint => "EaseInOutQuint",
            Preset::EaseInExpo => "EaseInExpo",
            Preset::EaseOutExpo => "EaseOutExpo",
            Preset::EaseInOutExpo => "EaseInOutExpo",
            Preset::EaseInCirc => "EaseInCirc",
            Preset::EaseOutCirc => "EaseOutCirc",
            Preset::EaseInOutCirc => "EaseInOutCirc",
            Preset::EaseInBack => "EaseInBack",
            Preset::EaseOutBack => "EaseOutBack",
            Preset::EaseInOutBack => "EaseInOutBack",
        }
    }

    /// Coefficients `(x1, y1, x2, y2)` of the preset.
    pub const fn curve(self) -> CubicBezier {
        match self {
            Preset::Constant => CubicBezier::new(0.0, f64::NEG_INFINITY, 1.0, f64::INFINITY),
            Preset::Linear => CubicBezier::new(0.25, 0.25, 0.75, 0.75),
            Preset::EaseInSine => CubicBezier::new(0.12, 0.0, 0.39, 0.0),
            Preset::EaseOutSine => CubicBezier::new(0.61, 1.0, 0.88, 1.0),
            Preset::EaseInOutSine => CubicBezier::new(0.37, 0.0, 0.63, 1.0),
            Preset::EaseInQuad => CubicBezier::new(0.11, 0.0, 0.5, 0.0),
            Preset::EaseOutQuad => CubicBezier::new(0.5, 1.0, 0.89, 1.0),
            Preset::EaseInOutQuad => CubicBezier::new(0.45, 0.0, 0.55, 1.0),
            Preset::EaseInCubic => CubicBezier::new(0.32, 0.0, 0.67, 0.0),
            Preset::EaseOutCubic => CubicBezier::new(0.33, 1.0, 0.68, 1.0),
            Preset::EaseInOutCubic => CubicBezier::new(0.65, 0.0, 0.35, 1.0),
            Preset::EaseInQuart => CubicBezier::new(0.5, 0.0, 0.75, 0.0),
            Preset::EaseOutQuart => CubicBezier::new(0.25, 1.0, 0.5, 1.0),
            Preset::EaseInOutQuart => CubicBezier::new(0.76, 0.0, 0.24, 1.0),
            Preset::EaseInQuint => CubicBezier::new(0.64, 0.0, 0.78, 0.0),
            Preset::EaseOutQuint => CubicBezier::new(0.22, 1.0, 0.36, 1.0),
            Preset::EaseInOutQuint => CubicBezier::new(0.83, 0.0, 0.17, 1.0),
            Preset::EaseInExpo => CubicBezier::new(0.7, 0.0, 0.84, 0.0),
            Preset::EaseOutExpo => CubicBezier::new(0.16, 1.0, 0.3, 1.0),
            Preset::EaseInOutExpo => CubicBezier::new(0.87, 0.0, 0.13, 1.0),
            Preset::EaseInCirc => CubicBezier::new(0.55, 0.0, 1.0, 0.45),
            Preset::EaseOutCirc => CubicBezier::new(0.0, 0.55, 0.45, 1.0),
            Preset::EaseInOutCirc => CubicBezier::new(0.85, 0.0, 0.15, 1.0),
            Preset::EaseInBack => CubicBezier::new(0.36, 0.0, 0.66, -0.56),
            Preset::EaseOutBack => CubicBezier::new(0.34, 1.56, 0.64, 1.0),
            Preset::EaseInOutBack => CubicBezier::new(0.68, -0.6, 0.32, 1.6),
        }
    }

    /// Look a preset up by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coefficients of the built-in preset called `name`, if there is one.
pub fn lookup_preset(name: &str) -> Option<CubicBezier> {
    Preset::from_name(name).map(Preset::curve)
}

/// [`CurveCatalog`] over the built-in presets only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPresets;

impl CurveCatalog for BuiltinPresets {
    fn lookup(&self, name: &str) -> Option<CubicBezier> {
        lookup_preset(name)
    }

    fn names(&self) -> Vec<String> {
        Preset::ALL.iter().map(|p| p.name().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_unknown_is_none() {
        assert_eq!(lookup_preset("NoSuchCurve"), None);
        assert_eq!(lookup_preset(""), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup_preset("easeinoutback"), None);
        assert_eq!(lookup_preset("EASEINOUTBACK"), None);
    }

    #[test]
    fn lookup_ease_in_out_back() {
        assert_eq!(
            lookup_preset("EaseInOutBack"),
            Some(CubicBezier::new(0.68, -0.6, 0.32, 1.6))
        );
    }

    #[test]
    fn constant_uses_infinite_y() {
        let c = lookup_preset("Constant").unwrap();
        assert_eq!(c.x1, 0.0);
        assert_eq!(c.x2, 1.0);
        assert_eq!(c.y1, f64::NEG_INFINITY);
        assert_eq!(c.y2, f64::INFINITY);
    }

    #[test]
    fn table_matches_reference_values() {
        let expected = [
            ("Linear", [0.25, 0.25, 0.75, 0.75]),
            ("EaseInSine", [0.12, 0.0, 0.39, 0.0]),
            ("EaseOutSine", [0.61, 1.0, 0.88, 1.0]),
            ("EaseInOutSine", [0.37, 0.0, 0.63, 1.0]),
            ("EaseInQuad", [0.11, 0.0, 0.5, 0.0]),
            ("EaseOutQuad", [0.5, 1.0, 0.89, 1.0]),
            ("EaseInOutQuad", [0.45, 0.0, 0.55, 1.0]),
            ("EaseInCubic", [0.32, 0.0, 0.67, 0.0]),
            ("EaseOutCubic", [0.33, 1.0, 0.68, 1.0]),
            ("EaseInOutCubic", [0.65, 0.0, 0.35, 1.0]),
            ("EaseInQuart", [0.5, 0.0, 0.75, 0.0]),
            ("EaseOutQuart", [0.25, 1.0, 0.5, 1.0]),
            ("EaseInOutQuart", [0.76, 0.0, 0.24, 1.0]),
            ("EaseInQuint", [0.64, 0.0, 0.78, 0.0]),
            ("EaseOutQuint", [0.22, 1.0, 0.36, 1.0]),
            ("EaseInOutQuint", [0.83, 0.0, 0.17, 1.0]),
            ("EaseInExpo", [0.7, 0.0, 0.84, 0.0]),
            ("EaseOutExpo", [0.16, 1.0, 0.3, 1.0]),
            ("EaseInOutExpo", [0.87, 0.0, 0.13, 1.0]),
            ("EaseInCirc", [0.55, 0.0, 1.0, 0.45]),
            ("EaseOutCirc", [0.0, 0.55, 0.45, 1.0]),
            ("EaseInOutCirc", [0.85, 0.0, 0.15, 1.0]),
            ("EaseInBack", [0.36, 0.0, 0.66, -0.56]),
            ("EaseOutBack", [0.34, 1.56, 0.64, 1.0]),
            ("EaseInOutBack", [0.68, -0.6, 0.32, 1.6]),
        ];
        for (name, coeffs) in expected {
            assert_eq!(lookup_preset(name).map(CubicBezier::to_array), Some(coeffs), "{}", name);
        }
    }

    #[test]
    fn names_round_trip() {
        for p in Preset::ALL {
            assert_eq!(Preset::from_name(p.name()), Some(p));
            assert_eq!(p.to_string(), p.name());
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Preset::ALL.len());
    }

    #[test]
    fn no_elastic_or_bounce() {
        for name in ["EaseInElastic", "EaseOutBounce", "EaseInOutBounce", "EaseInOutElastic"] {
            assert_eq!(lookup_preset(name), None, "{}", name);
        }
    }

    #[test]
    fn builtin_catalog_lists_everything() {
        let names = BuiltinPresets.names();
        assert_eq!(names.len(), 26);
        assert_eq!(names[0], "Constant");
        assert_eq!(BuiltinPresets.lookup("EaseOutBack"), Some(Preset::EaseOutBack.curve()));
    }
}
