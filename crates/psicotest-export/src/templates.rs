//! Built-in report templates (Tera syntax).
//!
//! Both templates receive the serialized `TestReport` plus the derived
//! `instrument_name` and `completed_on` variables.

pub const MARKDOWN_NAME: &str = "report.md";

pub const HTML_NAME: &str = "report.html";

pub const MARKDOWN: &str = r#"# Report {{ instrument_name }}

{% if subject %}**Soggetto:** {{ subject }}
{% endif %}**Data di compilazione:** {{ completed_on }}

## Sintesi

{{ interpretation.summary }}

## Punteggi

| Scala | Tipo | Media | Livello |
|---|---|---|---|
{% for scale in interpretation.scales -%}
| {{ scale.name }} | {% if scale.kind == "domain" %}Dominio{% elif scale.kind == "facet" %}Faccetta{% else %}Fattore{% endif %} | {{ scale.mean | round(method="common", precision=2) }} | {{ scale.label }} |
{% endfor %}
## Profilo interpretativo

{% for narrative in interpretation.narratives -%}
### {{ narrative.name }}

{{ narrative.text }}

{% else -%}
Nessuna scala raggiunge livelli che richiedono un approfondimento descrittivo.

{% endfor -%}
{% if interpretation.balance_narrative -%}
## Bilancio scopi e antiscopi

{{ interpretation.balance_narrative }}

{% endif -%}
{% if orientation -%}
## Orientamento motivazionale

- **Scopi:** {{ orientation.goal_percentage }}% ({{ orientation.tally.goal_count }} scelte)
- **Antiscopi:** {{ orientation.anti_goal_percentage }}% ({{ orientation.tally.anti_goal_count }} scelte)

{{ orientation.narrative }}

{% endif -%}
## Raccomandazioni

{% for recommendation in interpretation.recommendations -%}
- **{{ recommendation.title }}:** {{ recommendation.body }}
{% endfor %}"#;

pub const HTML: &str = r#"<!DOCTYPE html>
<html lang="it">
<head>
<meta charset="utf-8">
<title>Report {{ instrument_name }}</title>
</head>
<body>
<h1>Report {{ instrument_name }}</h1>
{% if subject %}<p><strong>Soggetto:</strong> {{ subject }}</p>
{% endif %}<p><strong>Data di compilazione:</strong> {{ completed_on }}</p>

<h2>Sintesi</h2>
<p>{{ interpretation.summary }}</p>

<h2>Punteggi</h2>
<table>
<thead><tr><th>Scala</th><th>Media</th><th>Livello</th></tr></thead>
<tbody>
{% for scale in interpretation.scales -%}
<tr><td>{{ scale.name }}</td><td>{{ scale.mean | round(method="common", precision=2) }}</td><td style="color: {{ scale.color }}">{{ scale.label }}</td></tr>
{% endfor -%}
</tbody>
</table>

<h2>Profilo interpretativo</h2>
{% for narrative in interpretation.narratives -%}
<h3>{{ narrative.name }}</h3>
<p>{{ narrative.text }}</p>
{% else -%}
<p>Nessuna scala raggiunge livelli che richiedono un approfondimento descrittivo.</p>
{% endfor -%}
{% if interpretation.balance_narrative %}
<h2>Bilancio scopi e antiscopi</h2>
<p>{{ interpretation.balance_narrative }}</p>
{% endif -%}
{% if orientation %}
<h2>Orientamento motivazionale</h2>
<p>Scopi: {{ orientation.goal_percentage }}%; Antiscopi: {{ orientation.anti_goal_percentage }}%</p>
<p>{{ orientation.narrative }}</p>
{% endif %}
<h2>Raccomandazioni</h2>
<ul>
{% for recommendation in interpretation.recommendations -%}
<li><strong>{{ recommendation.title }}</strong>: {{ recommendation.body }}</li>
{% endfor -%}
</ul>
</body>
</html>
"#;
