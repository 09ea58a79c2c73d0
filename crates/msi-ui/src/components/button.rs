//! Button Components
//!
//! Button styles used across the site:
//! - Primary: red call-to-action ("Donate Now", "Get Involved")
//! - Outline: white outline over the hero image
//! - Ghost: text-only secondary action

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid red, darker on hover
    #[default]
    Primary,
    /// Transparent with a white border
    Outline,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    /// Hero and call-to-action buttons
    Large,
    /// Full panel width, used in the mobile menu
    Block,
}

impl ButtonSize {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            ButtonSize::Default => None,
            ButtonSize::Large => Some("btn-lg"),
            ButtonSize::Block => Some("btn-block"),
        }
    }
}

/// Join variant, size and extra classes into one class attribute.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut classes = vec![variant.class()];
    if let Some(size) = size.class() {
        classes.push(size);
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         size: ButtonSize::Large,
///         onclick: move |_| navigator.push("/donate"),
///         "Donate Now"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.size, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (menu toggle, close, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional `aria-expanded` state for disclosure buttons
    #[props(default)]
    pub expanded: Option<bool>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            "aria-expanded": props.expanded.map(|e| e.to_string()),
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}
