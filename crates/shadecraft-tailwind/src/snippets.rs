/// A named starter declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    pub name: &'static str,
    pub css: &'static str,
}

pub const SNIPPETS: &[Snippet] = &[
    Snippet {
        name: "Button",
        css: "display: inline-flex;\n\
              padding: 8px 16px;\n\
              background: #3b82f6;\n\
              color: white;\n\
              border-radius: 4px;\n\
              font-weight: 500;\n\
              cursor: pointer;\n\
              transition: background-color 150ms;",
    },
    Snippet {
        name: "Card",
        css: "display: flex;\n\
              flex-direction: column;\n\
              background: white;\n\
              border-radius: 8px;\n\
              padding: 16px;\n\
              box-shadow: 0 1px 3px rgba(0,0,0,0.12);",
    },
    Snippet {
        name: "Flex Container",
        css: "display: flex;\n\
              justify-content: space-between;\n\
              align-items: center;\n\
              gap: 16px;\n\
              padding: 12px;",
    },
    Snippet {
        name: "Gradient Button",
        css: "display: inline-block;\n\
              padding: 10px 20px;\n\
              background: linear-gradient(to right, #6366f1, #8b5cf6);\n\
              color: white;\n\
              border-radius: 4px;\n\
              font-weight: 500;\n\
              text-align: center;\n\
              box-shadow: 0 4px 6px rgba(0,0,0,0.1);",
    },
    Snippet {
        name: "Positioning",
        css: "position: absolute;\n\
              top: 0;\n\
              right: 0;\n\
              z-index: 10;\n\
              margin: 16px;\n\
              opacity: 0.8;",
    },
];

/// Look up a snippet by name, ignoring case.
pub fn find_snippet(name: &str) -> Option<&'static Snippet> {
    SNIPPETS.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}
