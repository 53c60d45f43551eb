use aydocs_core::{
    ScrollBehavior, ScrollHost, SectionIcon,
    catalog::{BUILTINS_PATH, DOCS_PATH},
};
use aydocs_ui::{CodeBlock, CopyButton, DomScrollHost, Icon};
use leptos::prelude::*;

use crate::use_settings;

const REPOSITORY_URL: &str = "https://github.com/MikeyA-yo/ay-ts";
const INSTALL_COMMAND: &str = "npm install -g ayscript";
const INSTALLATION_ANCHOR: &str = "installation-section";

const FEATURES: &[(SectionIcon, &str, &str)] = &[
    (
        SectionIcon::Zap,
        "Simple Syntax",
        "Clean, minimal syntax with custom aliases using the 'def' keyword for maximum readability",
    ),
    (
        SectionIcon::Code,
        "JavaScript Compatible",
        "Compiles to JavaScript, allowing you to run your AY code in any JavaScript environment",
    ),
    (
        SectionIcon::Terminal,
        "Rich Standard Library",
        "Comprehensive built-in functions for math, strings, arrays, HTTP requests, and more",
    ),
];

const CODE_EXAMPLE: &str = r#"// Define custom aliases for better readability
def var -> l
def fn -> f

// Variables and basic operations
var message = "Welcome to AY Language!"
var numbers = [3, 1, 4, 1, 5, 9]

// Functions with multiple parameters
fn calculate(a, b, c, d) {
    var sum = a + b + c + d
    var average = sum / 4
    return average
}

var result = calculate(10, 20, 30, 40)  // 25
print("Average: " + result)"#;

/// `/`: hero, feature grid, code sample, and install instructions.
#[component]
pub fn LandingPage() -> impl IntoView {
    let settings = use_settings();

    let get_started = move |_| {
        if let Err(err) = DomScrollHost.scroll_to_anchor(INSTALLATION_ANCHOR, ScrollBehavior::Smooth) {
            tracing::warn!(error = %err, "cannot scroll to installation");
        }
    };

    view! {
      <div class="aydocs-landing">
        <section class="aydocs-hero">
          <img src="/ayscript.jpg" alt="AY Language Logo" class="aydocs-hero-logo" />
          <h1>"The " <span class="aydocs-accent">"AY"</span> " Language"</h1>
          <p class="aydocs-hero-tagline">
            "A simple, custom programming language designed for experimentation, simplicity, and quick scripting"
          </p>
          <div class="aydocs-hero-actions">
            <button type="button" class="aydocs-button primary" on:click=get_started>
              <Icon icon=SectionIcon::Download />
              "Get Started"
            </button>
            <a href=REPOSITORY_URL class="aydocs-button outline">
              "View on GitHub"
            </a>
          </div>
        </section>

        <section class="aydocs-features">
          <h2>"Why Choose AY?"</h2>
          <div class="aydocs-feature-grid">
            {FEATURES
              .iter()
              .map(|(icon, title, description)| {
                view! {
                  <div class="aydocs-feature">
                    <Icon icon=*icon />
                    <h3>{*title}</h3>
                    <p>{*description}</p>
                  </div>
                }
              })
              .collect_view()}
          </div>
        </section>

        <section class="aydocs-showcase">
          <div>
            <h2>"See AY in Action"</h2>
            <p>
              "Experience the clean syntax and powerful features that make AY perfect for rapid prototyping and learning."
            </p>
            <ul>
              <li>"Custom keyword aliases with 'def'"</li>
              <li>"Simple variable declarations with 'l'"</li>
              <li>"Functions defined with 'f'"</li>
              <li>"Rich built-in function library"</li>
            </ul>
          </div>
          <CodeBlock title="example.ay" code=CODE_EXAMPLE />
        </section>

        <section id=INSTALLATION_ANCHOR class="aydocs-install">
          <h2>"Get Started Today"</h2>
          <div class="aydocs-install-box">
            <p>"Install AY globally via npm:"</p>
            <code class="aydocs-install-command">{INSTALL_COMMAND}</code>
            <CopyButton text=INSTALL_COMMAND feedback_ms=settings.navigation.copy_feedback_ms />
          </div>
          <div class="aydocs-hero-actions">
            <a href=DOCS_PATH class="aydocs-button light">
              "Read Documentation"
            </a>
            <a href=BUILTINS_PATH class="aydocs-button outline">
              "Built-in Functions"
            </a>
            <a href=REPOSITORY_URL class="aydocs-button outline">
              "Contribute"
            </a>
          </div>
        </section>

        <footer class="aydocs-landing-footer">
          <p>"Built with ❤️ for developers who love simple, expressive code"</p>
        </footer>
      </div>
    }
}
