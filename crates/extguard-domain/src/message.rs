use extguard_types::{ids, Reference};

/// Render the diagnostic for a reference already judged a violation.
///
/// Pure string interpolation of the reference's fields.
pub fn render_violation(reference: &Reference) -> String {
    let constant = &reference.constant;
    let source = &reference.source_package;

    let message = format!(
        "External dependency violation: '{name}' belongs to '{owner}', which is an external dependency of '{source}'.\n\
         Is there a different package to use instead, or should '{owner}' also be visible to '{source}'?\n\
         \n\
         {help}\n",
        name = constant.name,
        owner = constant.package,
        source = source.name,
        help = standard_help_message(reference),
    );

    message.trim_end().to_string()
}

fn standard_help_message(reference: &Reference) -> String {
    format!(
        "Inference details: this is a reference to {} which seems to be defined in {}.\n\
         To receive help interpreting or resolving this error message, see: {}.",
        reference.constant.name,
        reference.constant.location,
        ids::TROUBLESHOOT_URL,
    )
}
