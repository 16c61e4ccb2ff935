//! Dart template bodies
//!
//! Static file bodies rendered with `format!`. The registry template is
//! assembled from the same [`RouteDescriptor`] render functions the patcher
//! uses, so freshly generated output always carries every anchor and patching
//! the seeded route again is a guaranteed no-op.

use crate::naming::NameForms;
use crate::registry::RouteDescriptor;

/// A page widget: `lib/pages/<snake>/<snake>_page.dart`.
pub fn page(forms: &NameForms) -> String {
    format!(
        "import 'package:flutter/material.dart';

/// {title} page.
class {page_type} extends StatelessWidget {{
  const {page_type}({{super.key}});

  @override
  Widget build(BuildContext context) {{
    return Scaffold(
      appBar: AppBar(title: const Text('{title}')),
      body: const Center(
        child: Text('{title}'),
      ),
    );
  }}
}}
",
        title = forms.title,
        page_type = forms.page_type(),
    )
}

/// A data model: `lib/models/<snake>_model.dart`.
pub fn model(forms: &NameForms) -> String {
    format!(
        "/// Data model backing the {title} feature.
class {model_type} {{
  const {model_type}({{required this.id}});

  final String id;

  {model_type} copyWith({{String? id}}) {{
    return {model_type}(id: id ?? this.id);
  }}

  Map<String, dynamic> toJson() => {{'id': id}};

  factory {model_type}.fromJson(Map<String, dynamic> json) {{
    return {model_type}(id: json['id'] as String);
  }}
}}
",
        title = forms.title,
        model_type = forms.model_type(),
    )
}

/// A domain entity: `lib/entities/<snake>.dart`.
pub fn entity(forms: &NameForms) -> String {
    format!(
        "/// {title} domain entity.
class {pascal} {{
  const {pascal}({{required this.id}});

  final String id;

  @override
  bool operator ==(Object other) =>
      identical(this, other) || (other is {pascal} && other.id == id);

  @override
  int get hashCode => id.hashCode;
}}
",
        title = forms.title,
        pascal = forms.pascal,
    )
}

/// The `AppRoute` support type: `lib/routes/app_route.dart`.
pub fn app_route() -> String {
    "import 'package:flutter/widgets.dart';

/// One navigable route: path, name and widget builder.
class AppRoute {
  const AppRoute({
    required this.path,
    required this.name,
    required this.builder,
  });

  final String path;
  final String name;
  final WidgetBuilder builder;
}
"
    .to_string()
}

/// The route registry seeded with one route: `lib/routes/app_router.dart`.
pub fn registry(seed: &RouteDescriptor) -> String {
    format!(
        "import 'app_route.dart';
{import}

/// Central route table.
///
/// New pages are registered here automatically; edits outside the import
/// block, the constant table and the `routes` list are preserved.
abstract class Router {{
{constants}

  static final List<AppRoute> routes = [
{entry}
  ];
}}
",
        import = seed.import_line(),
        constants = seed.constant_lines(),
        entry = seed.entry_block(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming;
    use crate::registry::{PatchDetail, patch_document};

    #[test]
    fn page_template_renders_widget_and_title() {
        let forms = naming::derive("user_profile").unwrap();
        let body = page(&forms);
        assert!(body.contains("class UserProfilePage extends StatelessWidget"));
        assert!(body.contains("const Text('User Profile')"));
    }

    #[test]
    fn registry_template_round_trips_through_the_patcher() {
        let forms = naming::derive("home").unwrap();
        let seed = RouteDescriptor::from_forms(&forms);
        let doc = registry(&seed);

        // The generator's own output must carry every anchor and already
        // contain the seeded route.
        let patch = patch_document(&doc, &seed);
        assert_eq!(patch.detail, PatchDetail::AlreadyRegistered);
    }

    #[test]
    fn registry_template_accepts_new_routes() {
        let seed = RouteDescriptor::from_forms(&naming::derive("home").unwrap());
        let next = RouteDescriptor::from_forms(&naming::derive("settings").unwrap());
        let doc = registry(&seed);
        let patch = patch_document(&doc, &next);
        assert_eq!(patch.detail, PatchDetail::Applied);
        assert!(patch.updated.unwrap().contains("Router.settings,"));
    }
}
