//! Accessor text generation for libfg2 controls
//!
//! Pure rendering of C getter/setter accessor blocks from a control entry.
//! Each control yields four template kinds; rendering never touches I/O so
//! the output can be asserted on directly in tests.

use crate::controls::ControlEntry;

/// The four accessor text blocks derivable from one control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    GetterProto,
    SetterProto,
    GetterImpl,
    SetterImpl,
}

/// Render one accessor block for a control entry
pub fn render(kind: AccessorKind, entry: &ControlEntry) -> String {
    let const_name = entry.name.to_uppercase();
    let var_name = entry.name.to_lowercase();
    let text_name = var_name.replace('_', " ");
    let description = &entry.description;

    match kind {
        AccessorKind::GetterProto => format!(
            r#"///
/// \brief Get value of {text_name}.
///
/// {description}
///
/// \param fg     Frame grabber to set {text_name} on.
///
/// \return #FG_CONTROL_INVALID if the control is disabled or not supported,
///         or value of control otherwise.
///
int fg_get_{var_name}(fg_grabber *fg);
"#
        ),
        AccessorKind::SetterProto => format!(
            r#"///
/// \brief Set value of {text_name}.
///
/// {description}
///
/// \param  fg      Frame grabber to set {text_name} on.
/// \param  value   Value to set {text_name} to.
///
/// \return #FG_CONTROL_INVALID if the control is disabled or not supported,
///         #FG_CONTROL_READ_ONLY if the control can only be read or
///         #FG_CONTROL_OK if the value could be set.
///
int fg_set_{var_name}(fg_grabber *fg, int value);
"#
        ),
        AccessorKind::GetterImpl => format!(
            r#"///
/// \brief Get value of {text_name}.
///
/// {description}
///
/// \param fg     Frame grabber to set {text_name} on.
///
/// \return FG_CONTROL_INVALID if the control is disabled or not supported,
///         FG_CONTROL_READ_ONLY if the control can only be read or value of
///         control otherwise.
///
int fg_get_{var_name}(fg_grabber *fg)
{{
    return fg_get_control(fg, FG_CONTROL_ID_{const_name});
}}
"#
        ),
        AccessorKind::SetterImpl => format!(
            r#"///
/// \brief Set value of {text_name}.
///
/// {description}
///
/// \param  fg      Frame grabber to set {text_name} on.
/// \param  value   Value to set {text_name} to.
///
/// \return FG_CONTROL_INVALID if the control is disabled or not supported,
///         FG_CONTROL_READ_ONLY if the control can only be read,
///         FG_CONTROL_OUT_OF_RANGE if the value is out of range or
///         FG_CONTROL_OK if the control was set.
///
int fg_set_{var_name}(fg_grabber *fg, int value)
{{
    return fg_set_control(fg, FG_CONTROL_ID_{const_name}, value);
}}
"#
        ),
    }
}
