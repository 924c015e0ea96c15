//! 颁发详情页模板

use maud::{Markup, PreEscaped, html};

use crate::view::issued::{
    BadgeAction, BadgeImage, EntryValue, IssuedBadgePage, LinkList, Section,
};

pub fn issued_badge(page: &IssuedBadgePage) -> Markup {
    html! {
        div id="badge" {
            div id="badge-image" class="col-md-3" {
                (badge_image(&page.image))
                @for action in &page.actions {
                    (badge_action(action))
                }
            }
            div id="badge-details" class="col-md-9" {
                @for section in &page.sections {
                    (definition_section(section))
                }
                @if let Some(endorsement) = &page.endorsement {
                    (PreEscaped(endorsement))
                }
                @if let Some(related) = &page.related {
                    (link_list(related))
                }
                @if let Some(alignments) = &page.alignments {
                    (link_list(alignments))
                }
            }
        }
    }
}

fn badge_image(image: &BadgeImage) -> Markup {
    html! {
        img src=(image.src) alt=(image.alt) width="100";
        @if let Some(label) = &image.expired_label {
            i class="icon fa fa-exclamation-circle expireimage" title=(label) aria-label=(label) {}
        }
    }
}

fn badge_action(action: &BadgeAction) -> Markup {
    match action {
        BadgeAction::Download { url, label } => html! {
            form method="post" action=(url) {
                input type="submit" class="btn btn-secondary m-1" value=(label);
            }
        },
        BadgeAction::BackpackButton {
            assertion_url,
            label,
        } => html! {
            input type="button" id="addbutton" class="btn btn-secondary m-1" value=(label)
                data-action="addtobackpack" data-assertion=(assertion_url);
        },
        BadgeAction::BackpackLink { url, label } => html! {
            a class="btn btn-secondary m-1" role="button" href=(url) { (label) }
        },
    }
}

fn definition_section(section: &Section) -> Markup {
    html! {
        h3 { (section.heading) }
        dl {
            @for entry in &section.entries {
                dt { (entry.term) }
                dd { (entry_value(&entry.value)) }
            }
        }
    }
}

fn entry_value(value: &EntryValue) -> Markup {
    match value {
        EntryValue::Text(text) => html! { (text) },
        EntryValue::MailLink(email) => html! { a href={ "mailto:" (email) } { (email) } },
        EntryValue::ExternalLink(url) => html! { a href=(url) target="_blank" { (url) } },
        EntryValue::Markup(markup) => html! { (PreEscaped(markup)) },
        EntryValue::Evidence { intro, items } => html! {
            (intro)
            ul {
                @for item in items {
                    li { (item.phrase) (PreEscaped(&item.details_markup)) }
                }
            }
        },
    }
}

fn link_list(list: &LinkList) -> Markup {
    html! {
        h3 { (list.heading) }
        ul {
            @for link in &list.links {
                li { a href=(link.href) target="_blank" { (link.label) } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::evidence::EvidenceItem;
    use crate::view::issued::{Entry, Link};

    fn page() -> IssuedBadgePage {
        IssuedBadgePage {
            image: BadgeImage {
                src: "/image/3".to_string(),
                alt: "A star".to_string(),
                expired_label: None,
            },
            actions: Vec::new(),
            sections: Vec::new(),
            endorsement: None,
            related: None,
            alignments: None,
        }
    }

    #[test]
    fn test_expired_marker() {
        let mut page = page();
        page.image.expired_label = Some("This badge expired on Monday".to_string());

        let html = issued_badge(&page).into_string();
        assert!(html.contains(
            "<i class=\"icon fa fa-exclamation-circle expireimage\" \
             title=\"This badge expired on Monday\" aria-label=\"This badge expired on Monday\"></i>"
        ));
    }

    #[test]
    fn test_actions_markup() {
        let mut page = page();
        page.actions = vec![
            BadgeAction::Download {
                url: "/badge.php?hash=h1&bake=1".to_string(),
                label: "Download".to_string(),
            },
            BadgeAction::BackpackButton {
                assertion_url: "/assertion.php?b=h1".to_string(),
                label: "Add to backpack".to_string(),
            },
        ];

        let html = issued_badge(&page).into_string();
        assert!(html.contains("<form method=\"post\" action=\"/badge.php?hash=h1&amp;bake=1\">"));
        assert!(html.contains(
            "<input type=\"button\" id=\"addbutton\" class=\"btn btn-secondary m-1\" \
             value=\"Add to backpack\" data-action=\"addtobackpack\" \
             data-assertion=\"/assertion.php?b=h1\">"
        ));
        assert!(!html.contains("role=\"button\""));
    }

    #[test]
    fn test_backpack_link() {
        let mut page = page();
        page.actions = vec![BadgeAction::BackpackLink {
            url: "/backpack-add.php?hash=h1".to_string(),
            label: "Add to backpack".to_string(),
        }];

        let html = issued_badge(&page).into_string();
        assert!(html.contains(
            "<a class=\"btn btn-secondary m-1\" role=\"button\" \
             href=\"/backpack-add.php?hash=h1\">Add to backpack</a>"
        ));
        assert!(!html.contains("addbutton"));
    }

    #[test]
    fn test_entries_escape_text_but_not_markup() {
        let mut page = page();
        page.sections = vec![Section {
            heading: "Badge details".to_string(),
            entries: vec![
                Entry {
                    term: "Name".to_string(),
                    value: EntryValue::Text("<Rust & Co>".to_string()),
                },
                Entry {
                    term: "Criteria".to_string(),
                    value: EntryValue::Markup("<ul><li>quiz</li></ul>".to_string()),
                },
                Entry {
                    term: "Evidence".to_string(),
                    value: EntryValue::Evidence {
                        intro: "This badge was issued for completing: ".to_string(),
                        items: vec![EvidenceItem {
                            phrase: "The following activity has to be completed:".to_string(),
                            details_markup: "<b>Quiz 1</b>".to_string(),
                        }],
                    },
                },
            ],
        }];

        let html = issued_badge(&page).into_string();
        assert!(html.contains("<h3>Badge details</h3><dl><dt>Name</dt><dd>&lt;Rust &amp; Co&gt;</dd>"));
        assert!(html.contains("<dd><ul><li>quiz</li></ul></dd>"));
        assert!(html.contains(
            "<dd>This badge was issued for completing: <ul><li>\
             The following activity has to be completed:<b>Quiz 1</b></li></ul></dd>"
        ));
    }

    #[test]
    fn test_link_lists_open_new_window() {
        let mut page = page();
        page.alignments = Some(LinkList {
            heading: "Alignments".to_string(),
            links: vec![Link {
                label: "Digital literacy".to_string(),
                href: "https://framework.example.org/dl".to_string(),
            }],
        });

        let html = issued_badge(&page).into_string();
        assert!(html.contains(
            "<h3>Alignments</h3><ul><li><a href=\"https://framework.example.org/dl\" \
             target=\"_blank\">Digital literacy</a></li></ul>"
        ));
    }
}
