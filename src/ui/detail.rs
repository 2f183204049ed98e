/// Puppy detail screen
///
/// A full-width header photo with a rounded content panel that overlaps
/// its bottom edge. Photo and panel scroll together; the "Adopt Me"
/// button floats over the bottom-right corner.
use iced::alignment::{Horizontal, Vertical};
use iced::border::Radius;
use iced::widget::{button, column, container, image, row, scrollable, stack, text, Space};
use iced::{font, Border, Color, ContentFit, Element, Font, Length, Shadow, Theme, Vector};

use crate::assets::Assets;
use crate::state::data::PuppyRecord;
use crate::Message;

const HEADER_HEIGHT: f32 = 450.0;
/// How far the panel reaches up into the header photo
const PANEL_OVERLAP: f32 = 30.0;
const PANEL_RADIUS: f32 = 20.0;
/// Room left under the panel so the floating button never hides text
const BOTTOM_SPACE: f32 = 80.0;

/// Label for the puppy's sex
pub fn sex_label(is_male: bool) -> &'static str {
    if is_male {
        "Dog"
    } else {
        "Bitch"
    }
}

pub fn age_label(age_years: u32) -> String {
    format!("{age_years} Years Old.")
}

pub fn view<'a>(puppy: &'a PuppyRecord, assets: &Assets) -> Element<'a, Message> {
    let header = image(assets.handle(puppy.photo))
        .width(Length::Fill)
        .height(HEADER_HEIGHT)
        .content_fit(ContentFit::Cover);

    // Rounded lip of the panel drawn over the bottom of the photo
    let lip = container(Space::new(Length::Fill, PANEL_OVERLAP))
        .width(Length::Fill)
        .style(|theme: &Theme| panel_style(theme, true));

    let header = stack![
        header,
        column![Space::with_height(HEADER_HEIGHT - PANEL_OVERLAP), lip],
    ];

    let panel = container(panel_content(puppy))
        .width(Length::Fill)
        .padding([0.0, 8.0])
        .style(|theme: &Theme| panel_style(theme, false));

    let body = scrollable(column![header, panel, Space::with_height(BOTTOM_SPACE)])
        .height(Length::Fill);

    let page = column![
        super::top_bar("PuppyDetails", Some(Message::Back)),
        body,
    ];

    let adopt = container(
        button(row![text("+").size(20.0), text("Adopt Me").size(20.0)].spacing(8.0))
            .on_press(Message::AdoptMe)
            .padding([12.0, 16.0]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(16.0);

    stack![page, adopt].into()
}

fn panel_content(puppy: &PuppyRecord) -> Element<'_, Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    column![
        row![
            text(&puppy.nick_name).size(34.0).font(bold),
            text(format!("({})", puppy.breed)).size(20.0),
        ]
        .spacing(8.0)
        .align_y(Vertical::Bottom),
        row![text("Sex:").size(20.0), text(sex_label(puppy.is_male)).size(20.0)].spacing(8.0),
        row![text("Age:").size(20.0), text(age_label(puppy.age_years)).size(20.0)].spacing(8.0),
        text("Info:").size(20.0),
        text(&puppy.info).size(16.0),
        text("OtherInfo:").size(20.0),
        text(&puppy.other_info).size(16.0).line_height(1.25),
    ]
    .spacing(12.0)
    .into()
}

fn panel_style(theme: &Theme, rounded_top: bool) -> container::Style {
    let radius = if rounded_top {
        Radius {
            top_left: PANEL_RADIUS,
            top_right: PANEL_RADIUS,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    } else {
        Radius::from(0.0)
    };

    container::Style {
        background: Some(theme.palette().background.into()),
        border: Border {
            radius,
            ..Border::default()
        },
        shadow: if rounded_top {
            Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, -2.0),
                blur_radius: 5.0,
            }
        } else {
            Shadow::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::PhotoRef;

    #[test]
    fn test_sex_label() {
        assert_eq!(sex_label(true), "Dog");
        assert_eq!(sex_label(false), "Bitch");
    }

    #[test]
    fn test_sex_label_from_record() {
        let puppy = PuppyRecord::new("Bella.", PhotoRef::new("img_puppy_03"))
            .unwrap()
            .with_sex(false);
        assert_eq!(sex_label(puppy.is_male), "Bitch");
    }

    #[test]
    fn test_age_label() {
        assert_eq!(age_label(2), "2 Years Old.");
        assert_eq!(age_label(11), "11 Years Old.");
    }
}
