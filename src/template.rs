//! Component source templates and the choice of which one a file gets.

use crate::error::Result;
use crate::extension::{Extension, Stylesheet};
use crate::renderer::TemplateRenderer;
use cruet::Inflector;

const FUNCTIONAL_JSX: &str = r#"import React from 'react';
{% if stylesheet %}
import './{{ name }}.{{ stylesheet }}';
{% endif %}

const {{ name }} = (props) => {
    return <div className="{{ class_name }}">{{ name }}</div>;
};

export default {{ name }};
"#;

const CLASS_JSX: &str = r#"import React, { Component } from 'react';
{% if stylesheet %}
import './{{ name }}.{{ stylesheet }}';
{% endif %}

class {{ name }} extends Component {
    render() {
        return <div className="{{ class_name }}">{{ name }}</div>;
    }
}

export default {{ name }};
"#;

const FUNCTIONAL_TSX: &str = r#"import React from 'react';
{% if stylesheet %}
import './{{ name }}.{{ stylesheet }}';
{% endif %}

export interface {{ name }}Props {}

const {{ name }}: React.FC<{{ name }}Props> = (props) => {
    return <div className="{{ class_name }}">{{ name }}</div>;
};

export default {{ name }};
"#;

const CLASS_TSX: &str = r#"import React, { Component } from 'react';
{% if stylesheet %}
import './{{ name }}.{{ stylesheet }}';
{% endif %}

export interface {{ name }}Props {}

interface {{ name }}State {}

class {{ name }} extends Component<{{ name }}Props, {{ name }}State> {
    render() {
        return <div className="{{ class_name }}">{{ name }}</div>;
    }
}

export default {{ name }};
"#;

const TEST: &str = r#"import React from 'react';
import { render } from '@testing-library/react';
import {{ name }} from './{{ name }}';

describe('<{{ name }} />', () => {
    it('renders without crashing', () => {
        render(<{{ name }} />);
    });
});
"#;

/// Picks the template source for a file, `None` when the file is created empty.
pub fn template_source(extension: Extension, functional: bool) -> Option<&'static str> {
    match (extension, functional) {
        (Extension::Jsx, true) => Some(FUNCTIONAL_JSX),
        (Extension::Jsx, false) => Some(CLASS_JSX),
        (Extension::Tsx, true) => Some(FUNCTIONAL_TSX),
        (Extension::Tsx, false) => Some(CLASS_TSX),
        (Extension::TestJs | Extension::TestTs, _) => Some(TEST),
        // Stylesheets are only created, never templated
        _ => None,
    }
}

/// Renders the contents of `<name>.<extension>`.
///
/// `stylesheet` is only referenced by component templates; test files ignore it.
pub fn render_file(
    renderer: &dyn TemplateRenderer,
    name: &str,
    extension: Extension,
    functional: bool,
    stylesheet: Option<Stylesheet>,
) -> Result<String> {
    let Some(source) = template_source(extension, functional) else {
        return Ok(String::new());
    };

    let context = serde_json::json!({
        "name": name,
        "class_name": name.to_kebab_case(),
        "stylesheet": stylesheet.map(|s| s.to_string()),
    });
    renderer.render(source, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::MiniJinjaRenderer;

    #[test]
    fn test_template_selection() {
        assert_eq!(template_source(Extension::Jsx, true), Some(FUNCTIONAL_JSX));
        assert_eq!(template_source(Extension::Jsx, false), Some(CLASS_JSX));
        assert_eq!(template_source(Extension::Tsx, true), Some(FUNCTIONAL_TSX));
        assert_eq!(template_source(Extension::Tsx, false), Some(CLASS_TSX));
        assert_eq!(template_source(Extension::TestJs, false), Some(TEST));
        assert_eq!(template_source(Extension::TestTs, true), Some(TEST));
        assert_eq!(template_source(Extension::Scss, false), None);
        assert_eq!(template_source(Extension::Js, true), None);
    }

    #[test]
    fn test_class_tsx_with_stylesheet() {
        let renderer = MiniJinjaRenderer::new();
        let content =
            render_file(&renderer, "UserCard", Extension::Tsx, false, Some(Stylesheet::Scss))
                .unwrap();

        assert!(content.contains("import './UserCard.scss';"));
        assert!(content.contains("class UserCard extends Component<UserCardProps, UserCardState>"));
        assert!(content.contains(r#"className="user-card""#));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn test_functional_jsx_without_stylesheet() {
        let renderer = MiniJinjaRenderer::new();
        let content = render_file(&renderer, "Card", Extension::Jsx, true, None).unwrap();

        assert!(content.contains("const Card = (props) =>"));
        assert!(!content.contains("import './"));
    }

    #[test]
    fn test_test_file_ignores_stylesheet() {
        let renderer = MiniJinjaRenderer::new();
        let content =
            render_file(&renderer, "Card", Extension::TestTs, false, Some(Stylesheet::Css))
                .unwrap();

        assert!(content.contains("import Card from './Card';"));
        assert!(!content.contains(".css"));
    }

    #[test]
    fn test_stylesheet_is_empty() {
        let renderer = MiniJinjaRenderer::new();
        let content =
            render_file(&renderer, "Card", Extension::Sass, true, Some(Stylesheet::Sass)).unwrap();
        assert!(content.is_empty());
    }
}
