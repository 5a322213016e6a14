use askama::Template;

/// Hyperlink label for one menu entry. Rendering yields an anchor carrying a
/// `data-nav` marker; the client-side router intercepts activation on that
/// marker and navigates without a full page load. Building or rendering the
/// element has no other effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Template)]
#[template(path = "nav_link.html")]
pub struct NavLink {
    pub to: &'static str,
    pub text: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_anchor_with_target_and_text() {
        let link = NavLink {
            to: "/customer-records",
            text: "Customer Records",
        };
        assert_eq!(
            link.render().unwrap(),
            "<a class=\"nav-link\" data-nav href=\"/customer-records\">Customer Records</a>"
        );
    }

    #[test]
    fn escapes_markup_in_label_text() {
        let link = NavLink {
            to: "/government",
            text: "<b>Gov</b>",
        };
        let html = link.render().unwrap();
        assert!(html.contains("&lt;b&gt;Gov&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
