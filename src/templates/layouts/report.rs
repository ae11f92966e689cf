use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
.report-header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.12); }
main { max-width: 1100px; margin: 0 auto; padding: 1rem; }
#map { width: 100%; height: 75vh; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-top: 1.5rem; }
.region-table { width: 100%; border-collapse: collapse; }
.region-table th, .region-table td { padding: 0.4rem 0.75rem; border-bottom: 1px solid #e5e7eb; text-align: left; }
.region-table td.num { text-align: right; font-variant-numeric: tabular-nums; }
.microcopy { font-size: 0.8rem; color: #6b7280; }
"#;

pub fn report_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(PLOTLY_JS) charset="utf-8" {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                header class="report-header" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="icon icon-tabler icon-tabler-map"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M3 7l6 -3l6 3l6 -3v13l-6 3l-6 -3l-6 3v-13" {}
                        path d="M9 4v13" {}
                        path d="M15 7v13" {}
                    }
                    h3 { (title) }
                }
                (content)
            }
        }
    }
}
