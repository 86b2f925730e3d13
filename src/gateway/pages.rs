pub(super) const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>MarketMind</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
  form { display: grid; gap: .5rem; margin-bottom: 1.5rem; }
  pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>MarketMind</h1>
<p><a href="/dashboard">Dashboard</a></p>

<h2>Campaign</h2>
<form data-endpoint="/generate_campaign">
  <input name="product" placeholder="Product">
  <input name="audience" placeholder="Target audience">
  <input name="platform" placeholder="Platform (or Any)">
  <input name="goal" placeholder="Goal">
  <input name="tone" placeholder="Tone">
  <button>Generate</button>
</form>

<h2>Sales pitch</h2>
<form data-endpoint="/generate_pitch">
  <input name="product" placeholder="Product">
  <input name="customer_persona" placeholder="Customer persona">
  <input name="pain_points" placeholder="Pain points">
  <input name="format" placeholder="Format">
  <button>Generate</button>
</form>

<h2>Lead score</h2>
<form data-endpoint="/lead_score">
  <input name="name" placeholder="Lead name">
  <input name="budget" placeholder="Budget">
  <input name="need" placeholder="Need">
  <input name="urgency" placeholder="Urgency">
  <button>Score</button>
</form>

<pre id="output"></pre>
<script>
for (const form of document.querySelectorAll("form[data-endpoint]")) {
  form.addEventListener("submit", async (event) => {
    event.preventDefault();
    const body = {};
    for (const [key, value] of new FormData(form)) {
      if (value) body[key] = value;
    }
    const out = document.getElementById("output");
    out.textContent = "Generating...";
    const response = await fetch(form.dataset.endpoint, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body),
    });
    out.textContent = JSON.stringify(await response.json(), null, 2);
  });
}
</script>
</body>
</html>
"#;

pub(super) const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>MarketMind Dashboard</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; }
  table { border-collapse: collapse; width: 100%; }
  td, th { border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; }
</style>
</head>
<body>
<h1>Dashboard</h1>
<p><a href="/">Back</a></p>
<p>Total generated: <strong id="total">-</strong></p>
<h2>Usage</h2>
<ul id="breakdown"></ul>
<h2>Recent activity</h2>
<table>
  <thead><tr><th>Tool</th><th>Input</th><th>Time (UTC)</th></tr></thead>
  <tbody id="recent"></tbody>
</table>
<p id="error"></p>
<script>
(async () => {
  const stats = await (await fetch("/dashboard_stats")).json();
  if (stats.error) {
    document.getElementById("error").textContent = stats.error;
    return;
  }
  document.getElementById("total").textContent = stats.total_generated;
  const breakdown = document.getElementById("breakdown");
  for (const [kind, count] of Object.entries(stats.usage_breakdown)) {
    const li = document.createElement("li");
    li.textContent = `${kind}: ${count}`;
    breakdown.appendChild(li);
  }
  const recent = document.getElementById("recent");
  for (const row of stats.recent_activity) {
    const tr = document.createElement("tr");
    for (const cell of [row.tool_type, row.input_summary, row.timestamp]) {
      const td = document.createElement("td");
      td.textContent = cell;
      tr.appendChild(td);
    }
    recent.appendChild(tr);
  }
})();
</script>
</body>
</html>
"#;
