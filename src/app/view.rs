// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The whole form is one screen: a title, the category selector, and the
//! panel matching the active category. Which result (if any) a panel shows
//! is read straight off the form's single outcome value.

use super::Message;
use crate::form::preview::ImagePreview;
use crate::form::{Category, FormState, Outcome, Pending};
use crate::i18n::fluent::I18n;
use crate::ui::components::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, radio, scrollable, Column, Container, Image, Text};
use iced::{alignment, Element, Font, Length};

/// Preview render width; the widget scales the image down preserving
/// aspect ratio.
const PREVIEW_WIDTH: f32 = 360.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a FormState,
}

/// Renders the form: title, selector, and the active category's panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("form-title")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(view_selector(ctx.i18n, ctx.form.category()));

    if let Some(category) = ctx.form.category() {
        content = content.push(match category {
            Category::Text => view_text_panel(ctx.i18n, ctx.form),
            Category::Image => view_image_panel(ctx.i18n, ctx.form),
            Category::Audio | Category::ThreeD => view_placeholder_panel(ctx.i18n, category),
        });
    }

    Container::new(scrollable(content.width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .into()
}

/// The four category radios. Clicking one clears everything derived from
/// the previous category.
fn view_selector<'a>(i18n: &I18n, selected: Option<Category>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    for category in Category::ALL {
        column = column.push(radio(
            i18n.tr(category.label_key()),
            category,
            selected,
            Message::CategorySelected,
        ));
    }
    column.into()
}

fn view_text_panel<'a>(i18n: &I18n, form: &'a FormState) -> Element<'a, Message> {
    let mut panel = panel_column(i18n, Category::Text).push(choose_file_button(i18n));

    match form.outcome() {
        Outcome::Empty => {
            if form.pending() == Some(Pending::Upload) {
                panel = panel.push(pending_line(i18n, "upload-pending"));
            }
        }
        Outcome::Text(content) => {
            panel = panel
                .push(Text::new(i18n.tr("file-content-title")).size(typography::TITLE_SM))
                .push(
                    Container::new(
                        Text::new(content.as_str())
                            .font(Font::MONOSPACE)
                            .size(typography::BODY),
                    )
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(styles::container::panel),
                )
                .push(reset_button(i18n));
        }
        Outcome::Failed(message) => {
            panel = panel.push(failure_view(i18n, "upload-error-title", message));
        }
        // An image outcome cannot exist while the text category is active.
        Outcome::Image(_) => {}
    }

    panel.into()
}

fn view_image_panel<'a>(i18n: &I18n, form: &'a FormState) -> Element<'a, Message> {
    let mut panel = panel_column(i18n, Category::Image).push(choose_file_button(i18n));

    match form.outcome() {
        Outcome::Empty => {
            if form.pending() == Some(Pending::Preview) {
                panel = panel.push(pending_line(i18n, "preview-pending"));
            }
        }
        Outcome::Image(preview) => {
            panel = panel.push(view_preview(preview)).push(reset_button(i18n));
        }
        Outcome::Failed(message) => {
            panel = panel.push(failure_view(i18n, "preview-error-title", message));
        }
        // A text outcome cannot exist while the image category is active.
        Outcome::Text(_) => {}
    }

    panel.into()
}

fn view_preview<'a>(preview: &ImagePreview) -> Element<'a, Message> {
    Image::new(preview.handle.clone())
        .width(Length::Fixed(PREVIEW_WIDTH))
        .into()
}

/// Panels whose submit flows have no wired handler. The controls render
/// disabled; there is no server contract for these categories.
fn view_placeholder_panel<'a>(i18n: &I18n, category: Category) -> Element<'a, Message> {
    panel_column(i18n, category)
        .push(button(Text::new(i18n.tr("choose-file-button"))).style(styles::button::disabled()))
        .push(button(Text::new(i18n.tr("upload-button"))).style(styles::button::disabled()))
        .push(
            Text::new(i18n.tr("placeholder-caption"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .into()
}

fn panel_column<'a>(i18n: &I18n, category: Category) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr(category.panel_title_key())).size(typography::TITLE_MD))
}

fn pending_line<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    Text::new(i18n.tr(key))
        .size(typography::BODY)
        .color(palette::GRAY_400)
        .into()
}

fn failure_view<'a>(i18n: &I18n, title_key: &str, message: &str) -> Element<'a, Message> {
    ErrorDisplay::new(ErrorSeverity::Error)
        .title(i18n.tr(title_key))
        .message(message.to_string())
        .action(i18n.tr("reset-button"), Message::ResetRequested)
        .view()
}

fn choose_file_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    button(Text::new(i18n.tr("choose-file-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::ChooseFileRequested)
        .into()
}

fn reset_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    button(Text::new(i18n.tr("reset-button")))
        .style(styles::button::secondary)
        .on_press(Message::ResetRequested)
        .into()
}
