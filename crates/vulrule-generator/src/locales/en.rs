//! English templates.

use crate::{category::CategoryManifest, template::TemplateKind};

pub(super) const TEMPLATES: &[(TemplateKind, &str)] = &[
    (TemplateKind::Intro, INTRO),
    (TemplateKind::Api, API),
    (TemplateKind::Tool, TOOL),
    (TemplateKind::Type, TYPE),
    (TemplateKind::Project, PROJECT),
];

/// Projects, tools, labels.
pub(super) static CATEGORIES: [CategoryManifest; 3] = [
    CategoryManifest::generated_index(2, "Projects", "View rules by project."),
    CategoryManifest::generated_index(3, "Tools", "View rules by tool."),
    CategoryManifest::generated_index(4, "Types", "View rules by type."),
];

const INTRO: &str = r##"---
id: intro
title: Introduction
sidebar_position: 1
---


# About VulRule

## Overview

VulRule is an open-source project that helps developers identify and avoid common security vulnerabilities. We collect, organize and analyze vulnerability patterns in popular programming languages and libraries, and provide the matching mitigations and best practices.

## Our Mission

Our mission is to raise security awareness during software development by providing a comprehensive, systematic security knowledge base, to reduce the number of vulnerabilities introduced, and to contribute to a safer software ecosystem.

## Features

- **Broad coverage**: rules for many programming languages and widely used libraries
- **Practical guidance**: every rule comes with a detailed description and example code
- **Continuously updated**: we track the latest security research and vulnerability reports
- **Open and shared**: community contributions are welcome

## How to Contribute

We welcome contributions of every kind, including:

1. Submitting new vulnerability rules
2. Improving the descriptions and examples of existing rules
3. Reporting bugs and suggesting improvements
4. Improving documentation and translations

Visit our [GitHub repository]({{ project_url }}) to learn more about contributing.

## Contact

If you have any questions or suggestions, reach us through:

- GitHub Issues: [open an issue]({{ project_url }}/issues)
- Email: {{ email }}

Thank you for your interest in and support of VulRule!"##;

const API: &str = r##"---
---

# {{ api_name }}

## API Overview
**{{ api_name }}** is an API in **{{ lib_name }}**. This rule belongs to the **{{ label }}** type. This rule is generated using [**{{ tool_name }}**](../../tools/{{ tool_name }}).

## Rule Description

:::tip

{{ description }}

:::

:::info

Tag: **{{ label }}**

Parameter Index: **{{ param_index }}**

CWE Type: **{{ cwe_type }}**

:::

## Rule Code
```python
{{ code }}
```
"##;

const TOOL: &str = r##"---
---


# {{ tool_name }}

{{ tool_name }} generated {{ rule_count }} rules. Below is the list of rules generated by {{ tool_name }}. Click a rule name to see its details.

{{ listing }}"##;

const TYPE: &str = r##"---
---
# {{ type_name }}

There are {{ rule_count }} rules of type {{ type_name }}. Below is the list of {{ type_name }} rules. Click a rule name to see its details.

{{ listing }}"##;

const PROJECT: &str = r##"---
---


# {{ lib_name }}

{{ lib_name }} has {{ rule_count }} rules. Below is the list of rules in {{ lib_name }}. Click a rule name to see its details.

{{ listing }}"##;
