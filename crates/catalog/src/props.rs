use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::Serialize;
use std::collections::HashMap;

/// One declared prop of a catalog component.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct PropDefinition {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub prop_type: &'static str,
    pub required: bool,
    #[serde(rename = "defaultValue", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<&'static str>,
    pub description: &'static str,
}

/// One legal value of a variant prop. A prop name may appear in several
/// entries, one per legal value; consumers group by `name`.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct VariantDefinition {
    pub name: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// Props schema for a single component: declared props, registered variant
/// values, and sub-component exports that ride along in import statements.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ComponentPropsData {
    pub props: Vec<PropDefinition>,
    pub variants: Vec<VariantDefinition>,
    #[serde(rename = "subComponents")]
    pub sub_components: Vec<&'static str>,
}

const fn prop(
    name: &'static str,
    prop_type: &'static str,
    required: bool,
    default_value: Option<&'static str>,
    description: &'static str,
) -> PropDefinition {
    PropDefinition {
        name,
        prop_type,
        required,
        default_value,
        description,
    }
}

const fn variant(name: &'static str, value: &'static str, description: &'static str) -> VariantDefinition {
    VariantDefinition {
        name,
        value,
        description,
    }
}

/// Props/variants for the core tier plus `dialog` and `progress`, extracted
/// from the UI package sources. Components absent from this map are skipped by the prop
/// validator (backward compatibility with components the schema layer has
/// not caught up with yet).
static COMPONENT_PROPS_DATA: Lazy<HashMap<&'static str, ComponentPropsData>> = Lazy::new(|| {
    let mut data = HashMap::new();

    data.insert(
        "button",
        ComponentPropsData {
            props: vec![
                prop(
                    "variant",
                    "'default' | 'destructive' | 'outline' | 'secondary' | 'ghost' | 'link'",
                    false,
                    Some("default"),
                    "Visual style variant",
                ),
                prop(
                    "size",
                    "'default' | 'sm' | 'lg' | 'icon'",
                    false,
                    Some("default"),
                    "Button size",
                ),
                prop(
                    "asChild",
                    "boolean",
                    false,
                    Some("false"),
                    "Render as child element using Radix Slot",
                ),
            ],
            variants: vec![
                variant("variant", "default", "Default primary button"),
                variant("variant", "destructive", "Red destructive action"),
                variant("variant", "outline", "Outlined button"),
                variant("variant", "secondary", "Secondary gray button"),
                variant("variant", "ghost", "Transparent ghost button"),
                variant("variant", "link", "Link-styled button"),
            ],
            sub_components: vec![],
        },
    );

    data.insert(
        "input",
        ComponentPropsData {
            props: vec![
                prop("type", "string", false, None, "HTML input type (text, email, password, etc.)"),
                prop("placeholder", "string", false, None, "Placeholder text"),
                prop("disabled", "boolean", false, Some("false"), "Disabled state"),
            ],
            variants: vec![],
            sub_components: vec![],
        },
    );

    data.insert(
        "label",
        ComponentPropsData {
            props: vec![prop(
                "htmlFor",
                "string",
                false,
                None,
                "ID of the associated form element",
            )],
            variants: vec![],
            sub_components: vec![],
        },
    );

    data.insert(
        "card",
        ComponentPropsData {
            props: vec![prop("className", "string", false, None, "Additional CSS classes")],
            variants: vec![],
            sub_components: vec![
                "CardHeader",
                "CardTitle",
                "CardDescription",
                "CardContent",
                "CardFooter",
            ],
        },
    );

    data.insert(
        "badge",
        ComponentPropsData {
            props: vec![prop(
                "variant",
                "'default' | 'secondary' | 'destructive' | 'outline'",
                false,
                Some("default"),
                "Badge variant styling",
            )],
            variants: vec![
                variant("variant", "default", "Default primary badge"),
                variant("variant", "secondary", "Secondary badge"),
                variant("variant", "destructive", "Destructive red badge"),
                variant("variant", "outline", "Outlined badge"),
            ],
            sub_components: vec![],
        },
    );

    data.insert(
        "avatar",
        ComponentPropsData {
            props: vec![prop("className", "string", false, None, "Additional CSS classes")],
            variants: vec![],
            sub_components: vec!["AvatarImage", "AvatarFallback"],
        },
    );

    data.insert(
        "separator",
        ComponentPropsData {
            props: vec![
                prop(
                    "orientation",
                    "'horizontal' | 'vertical'",
                    false,
                    Some("horizontal"),
                    "Separator direction",
                ),
                prop(
                    "decorative",
                    "boolean",
                    false,
                    Some("true"),
                    "Whether separator is purely decorative",
                ),
            ],
            variants: vec![
                variant("orientation", "horizontal", "Horizontal rule"),
                variant("orientation", "vertical", "Vertical rule"),
            ],
            sub_components: vec![],
        },
    );

    data.insert(
        "checkbox",
        ComponentPropsData {
            props: vec![
                prop("checked", "boolean | 'indeterminate'", false, None, "Checkbox state"),
                prop("disabled", "boolean", false, Some("false"), "Disabled state"),
            ],
            variants: vec![],
            sub_components: vec![],
        },
    );

    data.insert(
        "radio-group",
        ComponentPropsData {
            props: vec![
                prop("value", "string", false, None, "Selected radio value"),
                prop("disabled", "boolean", false, Some("false"), "Disable all items"),
            ],
            variants: vec![],
            sub_components: vec!["RadioGroupItem"],
        },
    );

    data.insert(
        "switch",
        ComponentPropsData {
            props: vec![
                prop("checked", "boolean", false, None, "Switch state"),
                prop("disabled", "boolean", false, Some("false"), "Disabled state"),
            ],
            variants: vec![],
            sub_components: vec![],
        },
    );

    data.insert(
        "textarea",
        ComponentPropsData {
            props: vec![
                prop("placeholder", "string", false, None, "Placeholder text"),
                prop("disabled", "boolean", false, Some("false"), "Disabled state"),
                prop("rows", "number", false, None, "Visible text rows"),
            ],
            variants: vec![],
            sub_components: vec![],
        },
    );

    data.insert(
        "skeleton",
        ComponentPropsData {
            props: vec![prop(
                "className",
                "string",
                false,
                None,
                "CSS classes for width/height sizing",
            )],
            variants: vec![],
            sub_components: vec![],
        },
    );

    data.insert(
        "scroll-area",
        ComponentPropsData {
            props: vec![prop("className", "string", false, None, "Additional CSS classes")],
            variants: vec![],
            sub_components: vec!["ScrollBar"],
        },
    );

    data.insert(
        "form",
        ComponentPropsData {
            props: vec![prop(
                "control",
                "Control<TFieldValues>",
                true,
                None,
                "react-hook-form control object (via FormProvider)",
            )],
            variants: vec![],
            sub_components: vec![
                "FormField",
                "FormItem",
                "FormLabel",
                "FormControl",
                "FormDescription",
                "FormMessage",
            ],
        },
    );

    data.insert(
        "select",
        ComponentPropsData {
            props: vec![
                prop("value", "string", false, None, "Selected value"),
                prop("defaultValue", "string", false, None, "Initial value"),
                prop("disabled", "boolean", false, Some("false"), "Disabled state"),
            ],
            variants: vec![],
            sub_components: vec![
                "SelectTrigger",
                "SelectContent",
                "SelectValue",
                "SelectGroup",
                "SelectLabel",
                "SelectItem",
                "SelectSeparator",
            ],
        },
    );

    data.insert(
        "progress",
        ComponentPropsData {
            props: vec![
                prop("value", "number", true, Some("0"), "Current progress percentage"),
                prop("max", "number", false, Some("100"), "Maximum progress value"),
            ],
            variants: vec![],
            sub_components: vec![],
        },
    );

    data.insert(
        "dialog",
        ComponentPropsData {
            props: vec![prop("open", "boolean", false, None, "Controlled open state")],
            variants: vec![],
            sub_components: vec![
                "DialogTrigger",
                "DialogContent",
                "DialogHeader",
                "DialogTitle",
                "DialogDescription",
                "DialogFooter",
                "DialogClose",
            ],
        },
    );

    data
});

/// Props schema lookup, case-insensitive on component id or canonical name.
pub fn props_data(component: &str) -> Option<&'static ComponentPropsData> {
    let lower = component.to_lowercase();
    COMPONENT_PROPS_DATA.get(lower.as_str()).or_else(|| {
        // Canonical names like "RadioGroup" map onto the hyphenated id.
        crate::registry::component_by_id(&lower)
            .and_then(|meta| COMPONENT_PROPS_DATA.get(meta.id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_has_grouped_variant_values() {
        let button = props_data("Button").unwrap();
        let values: Vec<_> = button
            .variants
            .iter()
            .filter(|v| v.name == "variant")
            .map(|v| v.value)
            .collect();
        assert_eq!(values.len(), 6);
        assert!(values.contains(&"ghost"));
    }

    #[test]
    fn form_control_is_required_without_default() {
        let form = props_data("form").unwrap();
        let control = form.props.iter().find(|p| p.name == "control").unwrap();
        assert!(control.required);
        assert!(control.default_value.is_none());
    }

    #[test]
    fn unregistered_components_have_no_schema() {
        assert!(props_data("table").is_none());
        assert!(props_data("Calendar").is_none());
    }

    #[test]
    fn canonical_name_resolves_hyphenated_id() {
        assert!(props_data("RadioGroup").is_some());
        assert!(props_data("scroll-area").is_some());
    }
}
