use iced::widget::{column, container, image, mouse_area, scrollable, text, Column, Row, Space};
use iced::{font, Border, Color, ContentFit, Element, Font, Length, Shadow, Theme, Vector};

use super::press::PressState;
use super::text::clamp_lines;
use crate::assets::Assets;
use crate::state::catalog::Catalog;
use crate::state::data::PuppyRecord;
use crate::Message;

/// Height of the cropped photo in each cell
const PHOTO_HEIGHT: f32 = 160.0;
/// Space around each cell
const CELL_PADDING: f32 = 8.0;
/// Approximate characters per line in a cell
const LINE_CHARS: usize = 22;
/// Lines of biography shown under the name
const INFO_LINES: usize = 2;

/// Lay out `len` items row-major into rows of `columns` cells.
///
/// Each slot holds the catalog index it shows; the last row is padded
/// with `None` when `len` is not a multiple of `columns`.
pub fn grid_rows(len: usize, columns: usize) -> Vec<Vec<Option<usize>>> {
    if columns == 0 {
        return Vec::new();
    }

    (0..len.div_ceil(columns))
        .map(|row| {
            (0..columns)
                .map(|col| {
                    let index = row * columns + col;
                    (index < len).then_some(index)
                })
                .collect()
        })
        .collect()
}

/// The puppy list screen: a top bar over a scrollable grid
pub fn view<'a>(
    catalog: &'a Catalog,
    assets: &Assets,
    press: &[PressState],
    columns: usize,
) -> Element<'a, Message> {
    let puppies: Vec<&PuppyRecord> = catalog.all().collect();

    let rows = grid_rows(puppies.len(), columns).into_iter().map(|slots| {
        let cells = slots.into_iter().map(|slot| match slot {
            Some(index) => {
                let state = press.get(index).copied().unwrap_or_default();
                cell(index, puppies[index], assets, state)
            }
            None => Space::new(Length::FillPortion(1), Length::Shrink).into(),
        });
        Row::with_children(cells).into()
    });

    let grid = Column::with_children(rows).padding(CELL_PADDING);

    column![
        super::top_bar("Puppy", None),
        scrollable(grid).height(Length::Fill),
    ]
    .into()
}

/// One clickable puppy card
fn cell<'a>(
    index: usize,
    puppy: &'a PuppyRecord,
    assets: &Assets,
    state: PressState,
) -> Element<'a, Message> {
    let scale = state.scale();
    let pressed = state.is_pressed;

    let photo = image(assets.handle(puppy.photo))
        .width(Length::Fill)
        .height(PHOTO_HEIGHT * scale)
        .content_fit(ContentFit::Cover);

    let name = text(clamp_lines(&puppy.nick_name, LINE_CHARS, 1)).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    });

    let info = text(clamp_lines(&puppy.other_info, LINE_CHARS, INFO_LINES)).size(13.0);

    let card = container(column![
        photo,
        container(name).padding([8.0, 8.0]),
        container(info).padding(8.0),
    ])
    .width(Length::Fill)
    .style(move |theme: &Theme| card_style(theme, pressed));

    // Growing into the padding stands in for a scale transform
    let grow = (scale - 1.0) * PHOTO_HEIGHT / 2.0;
    let target = mouse_area(container(card).padding(CELL_PADDING - grow))
        .on_press(Message::CellPressed(index))
        .on_release(Message::CellReleased(index))
        .on_exit(Message::CellExited(index));

    container(target).width(Length::FillPortion(1)).into()
}

fn card_style(theme: &Theme, pressed: bool) -> container::Style {
    let palette = theme.palette();
    let background = if pressed {
        Color::from_rgb(0.83, 0.83, 0.83)
    } else {
        palette.background
    };

    container::Style {
        background: Some(background.into()),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 5.0,
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_items_two_columns() {
        let rows = grid_rows(15, 2);

        assert_eq!(rows.len(), 8);
        assert!(rows.iter().all(|r| r.len() == 2));
        assert_eq!(rows[0], vec![Some(0), Some(1)]);
        assert_eq!(rows[7], vec![Some(14), None]);
    }

    #[test]
    fn test_exact_fit_has_no_padding() {
        let rows = grid_rows(6, 3);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().flatten().all(Option::is_some));
    }

    #[test]
    fn test_row_major_order() {
        let indices: Vec<usize> = grid_rows(15, 2).into_iter().flatten().flatten().collect();
        assert_eq!(indices, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_degenerate_layouts() {
        assert!(grid_rows(0, 2).is_empty());
        assert!(grid_rows(15, 0).is_empty());
        assert_eq!(grid_rows(1, 4), vec![vec![Some(0), None, None, None]]);
    }
}
