/// Screens and widgets
///
/// - grid.rs: the two-column puppy list
/// - detail.rs: one puppy's full profile
/// - press.rs: per-cell pressed state
/// - text.rs: text clamping for grid cells

pub mod detail;
pub mod grid;
pub mod press;
pub mod text;

use iced::widget::{button, container, row, text as label};
use iced::{Alignment, Element, Length, Theme};

use crate::Message;

/// App bar shown at the top of each screen.
/// `back` adds a back arrow that emits the given message.
pub fn top_bar<'a>(title: &'a str, back: Option<Message>) -> Element<'a, Message> {
    let mut bar = row![].spacing(16.0).align_y(Alignment::Center);

    if let Some(message) = back {
        bar = bar.push(button(label("←").size(22.0)).on_press(message).padding([4.0, 8.0]));
    }
    bar = bar.push(label(title).size(22.0));

    container(bar)
        .width(Length::Fill)
        .padding([12.0, 16.0])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.primary.strong.color.into()),
                text_color: Some(palette.primary.strong.text),
                ..container::Style::default()
            }
        })
        .into()
}
