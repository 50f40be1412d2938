/// Reusable view fragments for the main window
///
/// Pure functions from state to widgets; all interaction is reported back
/// through [`Message`].

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, mouse_area, row, slider, text};
use iced::widget::horizontal_space;
use iced::{Alignment, Border, Element, Length, Theme};

use crate::state::quality::Quality;
use crate::Message;

/// Height reserved for each preview bitmap.
const PREVIEW_HEIGHT: f32 = 260.0;

/// The click-or-drop intake area, highlighted while a file hovers the window.
pub fn drop_zone(hovering: bool) -> Element<'static, Message> {
    let prompt = column![
        text("Drop an image here").size(22),
        text("or click to browse. PNG and JPEG, up to 10 MB.").size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let zone = container(prompt)
        .width(Length::Fill)
        .padding(36)
        .center_x(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let (background, accent) = if hovering {
                (palette.primary.weak.color, palette.primary.strong.color)
            } else {
                (palette.background.weak.color, palette.background.strong.color)
            };
            container::Style {
                background: Some(background.into()),
                border: Border {
                    color: accent,
                    width: 2.0,
                    radius: 10.0.into(),
                },
                ..container::Style::default()
            }
        });

    mouse_area(zone).on_press(Message::BrowseRequested).into()
}

/// The quality slider with its live percentage label.
pub fn quality_control(quality: Quality) -> Element<'static, Message> {
    row![
        text("Quality").size(16),
        slider(
            Quality::MIN..=Quality::MAX,
            quality.percent(),
            Message::QualityChanged
        )
        .step(1u8),
        text(quality.label()).size(16),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

/// One preview card: a title, the bitmap (or a placeholder while the first
/// encode is still running) and a list of label/value stat rows.
pub fn preview_card(
    title: &'static str,
    handle: Option<&Handle>,
    stats: Vec<(&'static str, String)>,
) -> Element<'static, Message> {
    let mut body = column![text(title).size(18)]
        .spacing(12)
        .align_x(Alignment::Center);

    body = match handle {
        Some(handle) => body.push(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(PREVIEW_HEIGHT)),
        ),
        None => body.push(
            container(text("Compressing...").size(14))
                .width(Length::Fill)
                .height(Length::Fixed(PREVIEW_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        ),
    };

    for (label, value) in stats {
        body = body.push(stat_row(label, value));
    }

    container(body)
        .padding(16)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

/// The download call-to-action shown once a file is loaded.
pub fn download_button() -> Element<'static, Message> {
    button(text("Download compressed image").size(16))
        .on_press(Message::DownloadRequested)
        .padding(12)
        .style(button::primary)
        .into()
}

/// The transient error banner.
pub fn error_banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(14))
        .width(Length::Fill)
        .padding(12)
        .center_x(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.danger.base.color.into()),
                text_color: Some(palette.danger.base.text),
                border: Border {
                    radius: 8.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })
        .into()
}

fn stat_row(label: &'static str, value: String) -> Element<'static, Message> {
    row![
        text(label).size(14),
        horizontal_space(),
        text(value).size(14),
    ]
    .width(Length::Fill)
    .into()
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}
