use aydocs_core::catalog::{self, DOCS_PATH};
use aydocs_ui::{Callout, CalloutTone, CodeBlock, DocSection, DocsFooter, DocsLayout, Prose};
use leptos::{either::Either, prelude::*};

use crate::{PageUnavailable, use_settings};

/// `/docs`: language introduction and getting started.
#[component]
pub fn DocsPage() -> impl IntoView {
    let settings = use_settings();

    match catalog::docs_sections() {
        Ok(registry) => Either::Left(view! {
          <DocsLayout registry=registry config=settings.navigation title="AY Docs">
            <header class="aydocs-page-header">
              <h1>"AY Language Documentation"</h1>
              <p>
                "Learn how to use the AY programming language for experimentation, scripting, and rapid prototyping."
              </p>
            </header>

            <Introduction />
            <Installation />
            <Compiler />
            <Variables />

            <DocsFooter />
          </DocsLayout>
        }),
        Err(error) => Either::Right(view! { <PageUnavailable path=DOCS_PATH error=error /> }),
    }
}

#[component]
fn Introduction() -> impl IntoView {
    view! {
      <DocSection id="introduction">
        <Prose>
          <p>
            "AY is a simple, custom programming language designed for experimentation, simplicity, customization, and quick scripting. "
            "This compiler translates AY programs into JavaScript, allowing you to run your AY code in any JavaScript server-side environment."
          </p>
        </Prose>
        <Callout title="Key Features:">
          <ul>
            <li>"Simple, minimal syntax with custom keyword aliases"</li>
            <li>"Compiles to JavaScript for universal compatibility"</li>
            <li>"Rich standard library with built-in functions"</li>
            <li>"Functional programming paradigm"</li>
            <li>"Perfect for rapid prototyping and learning"</li>
          </ul>
        </Callout>
      </DocSection>
    }
}

#[component]
fn Installation() -> impl IntoView {
    view! {
      <DocSection id="installation">
        <h3>"Option 1: Install from npm (Recommended)"</h3>
        <p>"Install the AY compiler globally using npm:"</p>
        <CodeBlock code="npm install -g ayscript" />

        <h3>"Option 2: Install from Source"</h3>
        <p>"For development or contributing:"</p>
        <CodeBlock code="git clone https://github.com/MikeyA-yo/ay-ts.git\ncd ay-ts\nnpm install\nnpx tsc" />
      </DocSection>
    }
}

#[component]
fn Compiler() -> impl IntoView {
    view! {
      <DocSection id="compiler">
        <h3>"Basic Usage"</h3>
        <p>"To compile and run an AY program, follow these steps:"</p>

        <h4>"1. Create an AY file"</h4>
        <p>"Write your AY code in a file with the " <code>".ay"</code> " extension:"</p>
        <CodeBlock code="myprogram.ay" />

        <h4>"2. Compile the program"</h4>
        <p>"Use the AY compiler to generate JavaScript:"</p>
        <CodeBlock code="ayc myprogram.ay" />

        <h4>"3. Run the generated JavaScript"</h4>
        <p>"Execute the compiled JavaScript file with Node.js:"</p>
        <CodeBlock code="node myprogram.js" />

        <Callout title="Quick Example">
          <CodeBlock
            title="hello.ay"
            code="l message = \"Hello, AY Language!\"\nprint(message)"
          />
          <CodeBlock code="$ ayc hello.ay\n$ node hello.js\nHello, AY Language!" />
        </Callout>
      </DocSection>
    }
}

#[component]
fn Variables() -> impl IntoView {
    view! {
      <DocSection id="variables">
        <h3>"Variable Declaration"</h3>
        <p>
          "Variables in AY are declared using the " <code>"l"</code> " keyword and are block-scoped:"
        </p>
        <CodeBlock code="l name = \"Alice\"\nl age = 25\nl isActive = true" />

        <h3>"Supported Data Types"</h3>
        <div class="aydocs-grid">
          <CodeBlock
            title="Strings"
            code="l greeting = \"Hello World\"\nl message = 'Single quotes work too'"
          />
          <CodeBlock title="Numbers" code="l integer = 42\nl decimal = 3.14159\nl negative = -100" />
          <CodeBlock title="Booleans" code="l isTrue = true\nl isFalse = false" />
          <CodeBlock
            title="Arrays"
            code="l numbers = [1, 2, 3, 4, 5]\nl fruits = [\"apple\", \"banana\", \"orange\"]\nl mixed = [1, \"hello\", true]"
          />
          <CodeBlock
            title="Functions"
            code="f greet(name) {\n    return \"Hello, \" + name + \"!\"\n}\nl sayHello = greet"
          />
        </div>

        <Callout tone=CalloutTone::Warning title="Working with Objects">
          <p>
            "AY is currently functional-only and doesn't support object literals. However, you can work with object-like data "
            "using JSON strings, especially when dealing with HTTP responses:"
          </p>
          <CodeBlock code=OBJECTS_EXAMPLE />
          <p>
            <strong>"Note:"</strong>
            " While objects aren't first-class citizens in AY, JSON strings provide a way to work with structured data, "
            "particularly when interfacing with APIs and web services."
          </p>
        </Callout>

        <h3>"Custom Keyword Aliases"</h3>
        <p>
          "Use the " <code>"def"</code> " keyword to create custom aliases for better readability:"
        </p>
        <CodeBlock code=ALIASES_EXAMPLE />
      </DocSection>
    }
}

const OBJECTS_EXAMPLE: &str = r#"// Working with JSON strings for object-like data
l userJson = '{"name": "Alice", "age": 25, "email": "alice@example.com"}'

// HTTP methods can return objects as JSON strings
l promise = httpGet("https://api.example.com/user/123")
awaitPromise(promise, f(data) {
    // data will be a JSON string like '{"id": 123, "name": "John"}'
    print("User data: " + data)
}, f(error) {
    print("Error: " + error)
})

// You can parse JSON using the built-in parseJson function
l userData = parseJson(userJson)
print("Parsed user data available as JSON string")"#;

const ALIASES_EXAMPLE: &str = r#"// Create custom aliases
def var -> l
def fn -> f

// Now use your custom syntax
var userName = "Alice"
var userAge = 30

fn calculateAge(birthYear) {
    var currentYear = 2025
    return currentYear - birthYear
}

var age = calculateAge(1995)
print("Age: " + age)"#;
