//! "我的成就"卡片墙模板

use maud::{Markup, PreEscaped, html};

use crate::view::collection::{BadgeCard, CollectionPage, CriteriaModal};

pub fn badge_collection(page: &CollectionPage) -> Markup {
    html! {
        h2 { (page.heading) }
        div class="block-myoverview block-cards" {
            div class="card-deck dashboard-card-deck" {
                @for card in &page.cards {
                    (badge_card(card))
                    (criteria_modal(&card.modal))
                }
            }
        }
    }
}

fn badge_card(card: &BadgeCard) -> Markup {
    html! {
        div class="card dashboard-card" {
            div class="card-body text-center" {
                a href=(card.link.href()) {
                    img src=(card.image_url) class="badge-image mb-2";
                }
                h5 class="card-title" { (card.name) }
                @if !card.description.is_empty() {
                    p class="card-text" { (card.description) }
                }
            }
            div class="card-footer text-muted" {
                small { span class=(card.status.css_class()) { (card.status_label) } }
                " "
                button type="button" class="btn btn-primary btn-sm float-right"
                    data-toggle="modal" data-target={ "#" (card.modal.id) } {
                    (card.criteria_label)
                }
            }
        }
    }
}

fn criteria_modal(modal: &CriteriaModal) -> Markup {
    html! {
        div class="modal" id=(modal.id) tabindex="-1" role="dialog" {
            div class="modal-dialog" role="document" {
                div class="modal-content" {
                    div class="modal-header" {
                        h5 class="modal-title" { (modal.title) }
                        button type="button" class="close" data-dismiss="modal" aria-label=(modal.close_label) {
                            span aria-hidden="true" { (PreEscaped("&times;")) }
                        }
                    }
                    div class="modal-body" {
                        (PreEscaped(&modal.criteria_markup))
                    }
                }
            }
        }
    }
}
