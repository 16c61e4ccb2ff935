//! Snapshot tests for the Dart templates
//!
//! The rendered bodies double as the patch engine's wire format (the registry
//! anchors are literals inside them), so any drift here is a breaking change.

use fledge::scaffold::templates;
use fledge::{RouteDescriptor, derive};
use insta::assert_snapshot;

#[test]
fn page_template_snapshot() {
    let forms = derive("user_profile").unwrap();
    assert_snapshot!(templates::page(&forms), @r"
import 'package:flutter/material.dart';

/// User Profile page.
class UserProfilePage extends StatelessWidget {
  const UserProfilePage({super.key});

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(title: const Text('User Profile')),
      body: const Center(
        child: Text('User Profile'),
      ),
    );
  }
}
");
}

#[test]
fn registry_template_snapshot() {
    let seed = RouteDescriptor::from_forms(&derive("home").unwrap());
    assert_snapshot!(templates::registry(&seed), @r"
import 'app_route.dart';
import '../pages/home/home_page.dart';

/// Central route table.
///
/// New pages are registered here automatically; edits outside the import
/// block, the constant table and the `routes` list are preserved.
abstract class Router {
  static const String home = '/home';
  static const String homeName = 'home';

  static final List<AppRoute> routes = [
    AppRoute(
      path: Router.home,
      name: Router.homeName,
      builder: (context) => const HomePage(),
    ),
  ];
}
");
}

#[test]
fn model_template_snapshot() {
    let forms = derive("order_item").unwrap();
    assert_snapshot!(templates::model(&forms), @r"
/// Data model backing the Order Item feature.
class OrderItemModel {
  const OrderItemModel({required this.id});

  final String id;

  OrderItemModel copyWith({String? id}) {
    return OrderItemModel(id: id ?? this.id);
  }

  Map<String, dynamic> toJson() => {'id': id};

  factory OrderItemModel.fromJson(Map<String, dynamic> json) {
    return OrderItemModel(id: json['id'] as String);
  }
}
");
}

#[test]
fn entity_template_snapshot() {
    let forms = derive("order_item").unwrap();
    assert_snapshot!(templates::entity(&forms), @r"
/// Order Item domain entity.
class OrderItem {
  const OrderItem({required this.id});

  final String id;

  @override
  bool operator ==(Object other) =>
      identical(this, other) || (other is OrderItem && other.id == id);

  @override
  int get hashCode => id.hashCode;
}
");
}
