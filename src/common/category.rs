use std::fmt::{self, Display};

/// One of the application roles the picker manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mailer,
    Browser,
    FileManager,
}

/// Classification order for desktop files.
///
/// A file joins the first category in this list whose tag its
/// `Categories=` line contains, and only that one, even when the line
/// would satisfy several filters.
pub const CATEGORY_PRIORITY: [Category; 3] =
    [Category::Mailer, Category::Browser, Category::FileManager];

impl Category {
    /// Tag looked for inside a `Categories=` line
    pub fn tag(self) -> &'static str {
        match self {
            Category::Mailer => "Email",
            Category::Browser => "WebBrowser",
            Category::FileManager => "FileManager",
        }
    }

    /// Prompt shown when selecting an application for this category
    pub fn prompt(self) -> &'static str {
        match self {
            Category::Mailer => "Default Mailer",
            Category::Browser => "Default Browser",
            Category::FileManager => "Default Filemanager",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Mailer => "mailer",
            Category::Browser => "browser",
            Category::FileManager => "file manager",
        })
    }
}

/// Classify desktop-file contents by its `Categories=` line.
///
/// The tag is matched as a case-sensitive substring of the line's value,
/// not as an exact token.
pub fn classify(contents: &str) -> Option<Category> {
    CATEGORY_PRIORITY.into_iter().find(|category| {
        contents.lines().any(|line| {
            line.strip_prefix("Categories=")
                .is_some_and(|value| value.contains(category.tag()))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_category_wins() {
        // SeaMonkey-style suites declare both roles; the mailer filter
        // runs first and claims the file.
        let contents = "[Desktop Entry]\nCategories=Network;WebBrowser;Email;\n";
        assert_eq!(classify(contents), Some(Category::Mailer));
    }

    #[test]
    fn substring_match_is_tolerated() {
        let contents = "Categories=X-WebBrowserLike;\n";
        assert_eq!(classify(contents), Some(Category::Browser));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(classify("Categories=webbrowser;\n"), None);
        assert_eq!(classify("Categories=email;\n"), None);
    }

    #[test]
    fn line_must_start_with_key() {
        assert_eq!(classify("X-Categories=Email;\n"), None);
        assert_eq!(classify("Comment=An Email client\n"), None);
    }

    #[test]
    fn no_categories_line() {
        assert_eq!(classify("[Desktop Entry]\nName=Foo\n"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn file_manager_tag() {
        let contents = "Categories=System;FileManager;\n";
        assert_eq!(classify(contents), Some(Category::FileManager));
    }
}
