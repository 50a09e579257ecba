//! File kinds that compgen knows how to emit.

use std::fmt;

/// A tag naming both a rendering variant and the file suffix it is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Js,
    Jsx,
    Ts,
    Tsx,
    Css,
    Scss,
    Sass,
    TestJs,
    TestTs,
}

impl Extension {
    /// File suffix, without the leading dot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Js => "js",
            Extension::Jsx => "jsx",
            Extension::Ts => "ts",
            Extension::Tsx => "tsx",
            Extension::Css => "css",
            Extension::Scss => "scss",
            Extension::Sass => "sass",
            Extension::TestJs => "test.js",
            Extension::TestTs => "test.ts",
        }
    }

    pub fn is_stylesheet(&self) -> bool {
        matches!(self, Extension::Css | Extension::Scss | Extension::Sass)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component language variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    Jsx,
    Tsx,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Jsx, Language::Tsx];

    pub fn extension(&self) -> Extension {
        match self {
            Language::Jsx => Extension::Jsx,
            Language::Tsx => Extension::Tsx,
        }
    }

    /// The test file suffix that goes with this language.
    pub fn test_extension(&self) -> Extension {
        match self {
            Language::Jsx => Extension::TestJs,
            Language::Tsx => Extension::TestTs,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Language::Jsx => "JavaScript (.jsx)",
            Language::Tsx => "TypeScript (.tsx)",
        }
    }
}

/// Stylesheet language variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Stylesheet {
    Css,
    Scss,
    Sass,
}

impl Stylesheet {
    pub const ALL: [Stylesheet; 3] = [Stylesheet::Css, Stylesheet::Scss, Stylesheet::Sass];

    pub fn extension(&self) -> Extension {
        match self {
            Stylesheet::Css => Extension::Css,
            Stylesheet::Scss => Extension::Scss,
            Stylesheet::Sass => Extension::Sass,
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.extension().fmt(f)
    }
}
