// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! iced builds views from `&self`, so the render pass cannot mutate the queue
//! from `view`. Instead the host runs [`Manager::render_pass`] in `update` with
//! a [`Snapshot`] surface, and [`Toast::view_overlay`] turns the recorded
//! frames into widgets.
//!
//! [`Manager::render_pass`]: super::Manager::render_pass

use super::icon_font::IconSet;
use super::manager::{Placement, Surface};
use super::notification::{Kind, Notification, NotificationId};
use crate::config::{
    PADDING_MESSAGE_Y, PADDING_X, PADDING_Y, TITLE_BODY_GAP, TOAST_ROUNDING, WRAP_FRACTION,
};
use crate::error::Error;
use crate::ui::design_tokens::{border, opacity, palette, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, keyed_column, responsive, text, Column, Container, Row};
use iced::{Background, Border, Color, Element, Length, Padding, Size, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Window position the toast stack grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
    Center,
}

impl Anchor {
    pub const ALL: [Anchor; 7] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
        Anchor::Center,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
            Anchor::Center => "center",
        }
    }

    #[must_use]
    pub fn horizontal(self) -> Horizontal {
        match self {
            Anchor::TopLeft | Anchor::BottomLeft => Horizontal::Left,
            Anchor::TopCenter | Anchor::BottomCenter | Anchor::Center => Horizontal::Center,
            Anchor::TopRight | Anchor::BottomRight => Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> Vertical {
        match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => Vertical::Top,
            Anchor::Center => Vertical::Center,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => Vertical::Bottom,
        }
    }

    /// Whether later toasts are placed above earlier ones.
    #[must_use]
    pub fn stacks_upward(self) -> bool {
        self.vertical() == Vertical::Bottom
    }
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::Config(format!("unknown anchor '{s}'")))
    }
}

/// Owned record of one toast drawn during a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastFrame {
    pub id: NotificationId,
    pub kind: Kind,
    /// Explicit title, or the kind's default.
    pub title: Option<String>,
    pub body: String,
    pub opacity: f32,
    /// Distance from the anchor edge.
    pub offset: f32,
    /// Estimated height at the snapshot's wrap width, used to compute the
    /// next toast's offset.
    pub height: f32,
}

/// [`Surface`] that records frames for the next `view`.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    frames: Vec<ToastFrame>,
    /// Width of the window the overlay is laid out in.
    viewport_width: f32,
}

impl Snapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot whose height estimates wrap text like a window
    /// `viewport_width` pixels wide.
    #[must_use]
    pub fn with_viewport_width(viewport_width: f32) -> Self {
        Self {
            frames: Vec::new(),
            viewport_width,
        }
    }

    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
    }

    #[must_use]
    pub fn frames(&self) -> &[ToastFrame] {
        &self.frames
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Surface for Snapshot {
    fn draw(&mut self, notification: &Notification, placement: Placement) -> f32 {
        let title = notification.display_title().map(str::to_owned);
        let mut body = notification.body().to_owned();
        if notification.body_truncated() {
            body.push(ELLIPSIS);
        }
        let has_icon = notification.kind().appearance().icon.is_some();
        let height = estimate_height(
            has_icon || title.is_some(),
            &body,
            wrap_width(self.viewport_width),
        );

        self.frames.push(ToastFrame {
            id: notification.id(),
            kind: notification.kind(),
            title,
            body,
            opacity: placement.opacity,
            offset: placement.offset,
            height,
        });
        height
    }
}

/// Appended to bodies cut at the text bound.
const ELLIPSIS: char = '\u{2026}';

/// Width at which toast text wraps in a window `viewport_width` pixels wide.
fn wrap_width(viewport_width: f32) -> f32 {
    (viewport_width * WRAP_FRACTION).max(sizing::TOAST_MIN_WIDTH)
}

/// Estimates the laid-out height of a toast without measuring text.
///
/// Body lines longer than the wrap width are counted once per wrapped row,
/// assuming an average glyph advance of [`typography::GLYPH_WIDTH_RATIO`].
fn estimate_height(has_header: bool, body: &str, wrap_width: f32) -> f32 {
    let mut height = spacing::XS * 2.0;

    if has_header {
        height += typography::TITLE * typography::LINE_HEIGHT;
    }

    if !body.is_empty() {
        if has_header {
            height += TITLE_BODY_GAP;
        }
        let text_width = (wrap_width - spacing::XS * 2.0).max(0.0);
        let per_row = (text_width / (typography::BODY * typography::GLYPH_WIDTH_RATIO))
            .floor()
            .max(1.0) as usize;
        let rows: usize = body
            .lines()
            .map(|line| line.chars().count().div_ceil(per_row).max(1))
            .sum();
        height += sizing::SEPARATOR + spacing::XXS;
        height += rows.max(1) as f32 * typography::BODY * typography::LINE_HEIGHT;
    }

    height
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast frame.
    pub fn view<'a, M: 'a>(
        frame: &'a ToastFrame,
        icons: &IconSet,
        wrap_width: f32,
    ) -> Element<'a, M> {
        let alpha = frame.opacity;
        let appearance = frame.kind.appearance();
        let text_color = Color {
            a: alpha,
            ..palette::WHITE
        };

        let mut header = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
        let mut has_header = false;

        if let Some(icon) = appearance.icon {
            let glyph = icons.glyph(icon);
            let icon_color = Color {
                a: alpha,
                ..appearance.color
            };
            header = header.push(
                text(glyph.ch.to_string())
                    .font(glyph.font)
                    .size(glyph.size)
                    .color(icon_color),
            );
            has_header = true;
        }

        if let Some(title) = &frame.title {
            header = header.push(
                text(title.as_str())
                    .size(typography::TITLE)
                    .color(text_color),
            );
            has_header = true;
        }

        let mut content = Column::new();
        if has_header {
            content = content.push(header);
        }

        if !frame.body.is_empty() {
            if has_header {
                content = content.push(gap(TITLE_BODY_GAP));
            }
            let separator = Container::new(Column::new())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::SEPARATOR))
                .style(move |_theme: &Theme| separator_style(alpha));
            content = content
                .push(separator)
                .push(gap(spacing::XXS))
                .push(
                    text(frame.body.as_str())
                        .size(typography::BODY)
                        .color(text_color),
                );
        }

        Container::new(content)
            .max_width(wrap_width)
            .padding(spacing::XS)
            .style(move |_theme: &Theme| toast_container_style(alpha))
            .into()
    }

    /// Renders the toast overlay with all recorded frames.
    ///
    /// Toasts stack away from `anchor`; text wraps at [`WRAP_FRACTION`] of the
    /// window width.
    pub fn view_overlay<'a, M: 'a>(
        frames: &'a [ToastFrame],
        anchor: Anchor,
        icons: &IconSet,
    ) -> Element<'a, M> {
        let icons = icons.clone();

        responsive(move |size: Size| {
            let wrap_width = wrap_width(size.width);

            let keyed = |frame: &'a ToastFrame| {
                (
                    frame.id.get(),
                    Self::aligned(frame, &icons, wrap_width, anchor),
                )
            };
            let toasts: Vec<(u64, Element<'a, M>)> = if anchor.stacks_upward() {
                frames.iter().rev().map(keyed).collect()
            } else {
                frames.iter().map(keyed).collect()
            };

            let stack = keyed_column(toasts)
                .spacing(PADDING_MESSAGE_Y)
                .width(Length::Fill);

            Container::new(stack)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(anchor.horizontal())
                .align_y(anchor.vertical())
                .padding(Padding::from([PADDING_Y, PADDING_X]))
                .into()
        })
        .into()
    }

    fn aligned<'a, M: 'a>(
        frame: &'a ToastFrame,
        icons: &IconSet,
        wrap_width: f32,
        anchor: Anchor,
    ) -> Element<'a, M> {
        Container::new(Self::view(frame, icons, wrap_width))
            .width(Length::Fill)
            .align_x(anchor.horizontal())
            .into()
    }
}

/// Fixed-height vertical gap.
fn gap<'a, M: 'a>(height: f32) -> Element<'a, M> {
    Container::new(Column::new())
        .height(Length::Fixed(height))
        .into()
}

/// Style function for the toast container.
fn toast_container_style(alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TOAST_BACKGROUND * alpha,
            ..palette::TOAST_BG
        })),
        border: Border {
            color: Color {
                a: alpha,
                ..palette::BLACK
            },
            width: border::WIDTH_SM,
            radius: TOAST_ROUNDING.into(),
        },
        text_color: Some(Color {
            a: alpha,
            ..palette::WHITE
        }),
        ..Default::default()
    }
}

fn separator_style(alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}
