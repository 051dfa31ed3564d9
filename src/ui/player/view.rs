// SPDX-License-Identifier: MPL-2.0
//! Overlay layout.
//!
//! The surface fills the window and toggles the overlay on press. While
//! visible, the overlay stacks the title bar, the transport row and the
//! scrubber on top of it.

use super::controller::Message;
use super::icons::ControlIcon;
use super::state::ControlsState;
use crate::domain::video::SkipStep;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, mouse_area, row, slider, text, Space, Stack};
use iced::{Element, Length};

/// Slider resolution as a fraction of the duration.
const SLIDER_STEP: f64 = 0.001;

pub struct ViewContext {
    pub skip_step: SkipStep,
}

pub fn view(ctx: ViewContext, state: &ControlsState) -> Element<'_, Message> {
    let surface = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::surface),
    )
    .on_press(Message::ToggleControls);

    let elements = state.elements();
    if !elements.as_array().contains(&true) {
        return surface.into();
    }

    let title = container(text(state.title.as_str()).size(typography::TITLE_MD))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::overlay::controls_container);

    let transport = row![
        transport_button(ControlIcon::SkipBackward, ctx.skip_step, Message::SkipBackward),
        transport_button(state.play_icon, ctx.skip_step, Message::TogglePlayback),
        transport_button(ControlIcon::SkipForward, ctx.skip_step, Message::SkipForward),
    ]
    .spacing(spacing::XL)
    .align_y(Vertical::Center);

    let scrubber = row![
        slider(0.0..=1.0, state.slider_value.clamp(0.0, 1.0), Message::SeekTo)
            .step(SLIDER_STEP)
            .width(Length::Fill),
        container(text(state.time_label()).size(typography::BODY))
            .width(Length::Fixed(sizing::TIME_LABEL_WIDTH))
            .align_x(Horizontal::Right),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    let overlay = column![
        title,
        container(transport)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
        container(scrubber)
            .width(Length::Fill)
            .padding([spacing::SM, spacing::LG])
            .style(styles::overlay::controls_container),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new().push(surface).push(overlay).into()
}

fn transport_button<'a>(
    icon: ControlIcon,
    step: SkipStep,
    on_press: Message,
) -> Element<'a, Message> {
    let label = match icon {
        ControlIcon::SkipForward => format!("{:.0} {}", step.value(), icon.glyph()),
        ControlIcon::SkipBackward => format!("{} {:.0}", icon.glyph(), step.value()),
        ControlIcon::Play | ControlIcon::Pause => icon.glyph().to_string(),
    };

    button(text(label).size(sizing::ICON_MD))
        .on_press(on_press)
        .padding(spacing::SM)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::overlay::transport_button)
        .into()
}
