//! Flat list of every card.

use iced::widget::{Column, container, scrollable};
use iced::{Element, Length};
use mailswipe_core::CardRecord;

use super::card::{Footer, view_card_content};
use crate::message::Message;
use crate::style::widgets::{list_row_style, list_scrollable_style};

/// Renders all cards, dismissed or not, top to bottom.
pub fn view_card_list(cards: &[CardRecord]) -> Element<'static, Message> {
    let rows: Vec<Element<'static, Message>> = cards
        .iter()
        .map(|card| {
            container(view_card_content(card, 1.0, Footer::None).spacing(4))
                .width(Length::Fill)
                .padding([14, 18])
                .style(list_row_style)
                .into()
        })
        .collect();

    let list = Column::with_children(rows)
        .spacing(10)
        .padding([16, 20])
        .max_width(720.0);

    scrollable(container(list).center_x(Length::Fill))
        .height(Length::Fill)
        .style(list_scrollable_style)
        .into()
}
