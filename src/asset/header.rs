//! Header rendering with typed variable injection.
//!
//! The generated fragment declares two constants per asset: a raw-string
//! character array with the minified text and a fixed-size byte array with
//! the gzip payload.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Variables for the generated asset header.
pub struct HeaderVars {
    /// Text constant name; the byte-array constant appends `_GZIP`.
    pub constant: String,
    /// Minified asset text, embedded inside a raw-string delimiter.
    pub minified: String,
    /// Byte count of the gzip payload (array size).
    pub gzip_len: usize,
    /// Comma-joined decimal bytes of the gzip payload.
    pub gzip_data: String,
    /// Emit the `PROGMEM` storage qualifier.
    pub progmem: bool,
}

impl TemplateVars for HeaderVars {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__QUALIFIER__", if self.progmem { " PROGMEM" } else { "" })
            .replace("__CONSTANT__", &self.constant)
            .replace("__GZIP_LEN__", &self.gzip_len.to_string())
            // Asset-controlled payloads go last so placeholder-looking
            // sequences inside them are never substituted.
            .replace("__MINIFIED__", &self.minified)
            .replace("__GZIP_DATA__", &self.gzip_data)
    }
}

/// Generated asset header: minified raw string + gzip byte array.
pub const ASSET_HEADER: Template<HeaderVars> = Template::new(include_str!("header.tmpl"));

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> HeaderVars {
        HeaderVars {
            constant: "CSS_STYLE".to_string(),
            minified: "body{color:red}".to_string(),
            gzip_len: 3,
            gzip_data: "1,2,3".to_string(),
            progmem: true,
        }
    }

    #[test]
    fn test_render_shape() {
        let rendered = ASSET_HEADER.render(&vars());
        assert!(rendered.contains("const char CSS_STYLE[] PROGMEM = R\"=====(\nbody{color:red}\n)=====\";"));
        assert!(rendered.contains("const uint8_t CSS_STYLE_GZIP[3] PROGMEM = { 1,2,3 };"));
        assert!(rendered.ends_with("};\n"));
    }

    #[test]
    fn test_render_without_progmem() {
        let rendered = ASSET_HEADER.render(&HeaderVars {
            progmem: false,
            ..vars()
        });
        assert!(!rendered.contains("PROGMEM"));
        assert!(rendered.contains("const char CSS_STYLE[] = R\"=====("));
        assert!(rendered.contains("const uint8_t CSS_STYLE_GZIP[3] = { 1,2,3 };"));
    }

    #[test]
    fn test_placeholders_in_payload_survive() {
        let rendered = ASSET_HEADER.render(&HeaderVars {
            minified: "var x = \"__GZIP_LEN__\";".to_string(),
            ..vars()
        });
        assert!(rendered.contains("var x = \"__GZIP_LEN__\";"));
    }
}
