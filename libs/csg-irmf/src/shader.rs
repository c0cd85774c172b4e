//! # Shader
//!
//! Generated GLSL plus the bounds of the model it describes.
//!
//! ## Layout
//!
//! ```text
//! library functions (sorted by name)
//! synthesized block functions (in generation order)
//! mainModel4
//! ```

use crate::format::number;
use crate::library::LibraryFunction;
use crate::mbb::Mbb;
use config::constants::{IrmfOptions, IRMF_VERSION};
use std::collections::BTreeSet;
use std::fmt;

/// Compiled IRMF shader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shader {
    /// Synthesized functions, ending with `mainModel4` when the scene has geometry.
    pub functions: Vec<String>,
    /// Library functions the synthesized code calls.
    pub library: BTreeSet<LibraryFunction>,
    /// Bounds of the model; `None` for an empty scene.
    pub mbb: Option<Mbb>,
}

impl Shader {
    /// `true` when the scene produced no geometry.
    pub fn is_empty(&self) -> bool {
        self.mbb.is_none()
    }

    /// Render the complete `.irmf` file: header comment followed by the shader.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use config::constants::IrmfOptions;
    ///
    /// let shader = csg_irmf::compile_source("cube(2);", false).unwrap();
    /// let irmf = shader.to_irmf(&IrmfOptions::default());
    /// assert!(irmf.starts_with("/*{\n  irmf: \"1.0\",\n  materials: [\"PLA\"],\n  max: [2,2,2],"));
    /// ```
    pub fn to_irmf(&self, options: &IrmfOptions) -> String {
        let mbb = self.mbb.unwrap_or(Mbb::new(Default::default(), Default::default()));
        format!(
            "/*{{\n  irmf: \"{IRMF_VERSION}\",\n  materials: [\"{}\"],\n  max: [{}],\n  min: [{}],\n  units: \"{}\",\n}}*/\n\n{self}",
            options.material,
            corner(mbb.max),
            corner(mbb.min),
            options.units,
        )
    }
}

fn corner(v: glam::DVec3) -> String {
    format!("{},{},{}", number(v.x), number(v.y), number(v.z))
}

impl fmt::Display for Shader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sources = self
            .library
            .iter()
            .map(|function| function.source())
            .chain(self.functions.iter().map(String::as_str));
        for (i, source) in sources.enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(source)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_display_orders_library_first() {
        let shader = Shader {
            functions: vec!["float a(in vec3 xyz) {\n}\n".into()],
            library: [LibraryFunction::Sphere, LibraryFunction::Circle].into(),
            mbb: None,
        };
        let text = shader.to_string();
        let circle = text.find("float circle(").unwrap();
        let sphere = text.find("float sphere(").unwrap();
        let a = text.find("float a(").unwrap();
        assert!(circle < sphere && sphere < a);
        assert!(text.contains("}\n\nfloat sphere("));
    }

    #[test]
    fn test_header() {
        let shader = Shader {
            functions: Vec::new(),
            library: BTreeSet::new(),
            mbb: Some(Mbb::new(DVec3::new(-0.5, 0.0, -2.0), DVec3::new(1.5, 2.0, 0.0))),
        };
        let options = IrmfOptions::new("PETG", "cm").unwrap();
        assert_eq!(
            shader.to_irmf(&options),
            "/*{\n  irmf: \"1.0\",\n  materials: [\"PETG\"],\n  max: [1.5,2,0],\n  min: [-0.5,0,-2],\n  units: \"cm\",\n}*/\n\n"
        );
    }

    #[test]
    fn test_empty() {
        let shader = Shader::default();
        assert!(shader.is_empty());
        assert_eq!(shader.to_string(), "");
    }
}
