//! Fixed page layout used for every published page.

use super::model::PageContext;

/// Page layout. Placeholders have the form `{{ name }}` and are resolved
/// against [`PageContext::value`].
pub const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }
        
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            overflow: hidden;
        }
        
        header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 3rem 2rem;
            text-align: center;
        }
        
        header h1 {
            font-size: 2.5rem;
            margin-bottom: 1rem;
            animation: fadeInDown 1s ease;
        }
        
        .meta {
            font-size: 0.9rem;
            opacity: 0.9;
            animation: fadeInUp 1s ease 0.3s both;
        }
        
        main {
            padding: 3rem 2rem;
        }
        
        .content {
            animation: fadeIn 1s ease 0.5s both;
        }
        
        .content h2 {
            color: #667eea;
            margin: 2rem 0 1rem;
            padding-bottom: 0.5rem;
            border-bottom: 2px solid #667eea;
        }
        
        .content h3 {
            color: #764ba2;
            margin: 1.5rem 0 0.75rem;
        }
        
        .content p {
            margin-bottom: 1rem;
            text-align: justify;
        }
        
        .content ul, .content ol {
            margin: 1rem 0 1rem 2rem;
        }
        
        .content li {
            margin-bottom: 0.5rem;
        }
        
        .content code {
            background: #f4f4f4;
            padding: 2px 6px;
            border-radius: 3px;
            font-family: 'Courier New', monospace;
        }
        
        .content pre {
            background: #f4f4f4;
            padding: 1rem;
            border-radius: 8px;
            overflow-x: auto;
            margin: 1rem 0;
        }
        
        .content blockquote {
            border-left: 4px solid #667eea;
            padding-left: 1rem;
            margin: 1rem 0;
            font-style: italic;
            color: #666;
        }
        
        footer {
            background: #f8f9fa;
            padding: 2rem;
            text-align: center;
            color: #666;
            border-top: 1px solid #dee2e6;
        }
        
        .badge {
            display: inline-block;
            padding: 0.25rem 0.75rem;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            border-radius: 20px;
            font-size: 0.85rem;
            margin: 0.5rem 0.25rem;
        }
        
        .badge.openai {
            background: linear-gradient(135deg, #10a37f 0%, #1a7f64 100%);
        }
        
        @keyframes fadeIn {
            from { opacity: 0; }
            to { opacity: 1; }
        }
        
        @keyframes fadeInDown {
            from {
                opacity: 0;
                transform: translateY(-20px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }
        
        @keyframes fadeInUp {
            from {
                opacity: 0;
                transform: translateY(20px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }
        
        @media (max-width: 768px) {
            header h1 {
                font-size: 1.75rem;
            }
            
            main {
                padding: 2rem 1.5rem;
            }
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>{{ title }}</h1>
            <div class="meta">
                <span class="badge">AI Generated</span>
                <span class="badge">{{ date }}</span>
                <span class="badge {{ provider_class }}">Powered by {{ provider_name }}</span>
            </div>
        </header>
        
        <main>
            <div class="content">
                {{ content }}
            </div>
        </main>
        
        <footer>
            <p>This content was automatically generated using {{ provider_name }}</p>
            <p>Last updated: {{ timestamp }}</p>
        </footer>
    </div>
</body>
</html>"#;

/// Renders the page layout with the given context.
pub fn render(context: &PageContext) -> String {
    render_template(PAGE_TEMPLATE, |key| context.value(key))
}

/// Single pass placeholder substitution.
///
/// Values are inserted verbatim and never re-scanned, so placeholder text
/// inside a value stays literal. Unknown placeholders and an unterminated
/// `{{` are left untouched.
pub fn render_template<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = after_open[..end].trim();
        match lookup(key) {
            Some(value) => output.push_str(value),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}
