use std::fmt::Write as _;

use aq_core::Reading;

/// Render the dashboard document. Pure: readings plus an optional AQI result
/// in, full HTML out.
pub fn render(readings: &[Reading], aqi: Option<i64>) -> String {
    let mut cards = String::new();
    for reading in readings {
        // Card faces show the bare number; the unit is implied by the label.
        let _ = write!(
            cards,
            r##"            <div class="card" data-bs-toggle="modal" data-bs-target="#graphModal" onclick="showGraph('{file}', '{label}')">
                <div class="card-body d-flex flex-column justify-content-center align-items-center">
                    <h4 class="mb-1">{value:.2}</h4>
                    <small>{label}</small>
                </div>
            </div>
"##,
            file = reading.metric.chart_file(),
            label = reading.metric.label(),
            value = reading.value,
        );
    }

    let aqi_block = match aqi {
        Some(aqi) => format!(
            r##"<div class="mt-3">
                <h5>Estimated AQI: <span class="badge bg-primary">{aqi}</span></h5>
            </div>"##
        ),
        None => String::new(),
    };

    // Non-placeholder braces are doubled because `format!` uses `{}`.
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Air Quality Dashboard</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>
        body, html {{
            height: 100%;
            margin: 0;
            background-color: #0b0742;
        }}
        h1 {{
            font-size: 2.5rem;
            font-weight: bold;
            text-align: center;
            margin-top: 10px;
            background: linear-gradient(to right, #32CD32, #228B22);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }}
        .card {{
            width: 200px;
            height: 150px;
            margin: 15px;
            background: linear-gradient(to bottom right, #4da3ff, #0066cc);
            color: white;
            text-align: center;
            border: none;
            border-radius: 10px;
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);
            cursor: pointer;
        }}
        .card:hover {{
            transform: scale(1.05);
            box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3);
        }}
        .container {{
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            padding: 20px;
        }}
        .left-panel {{
            width: 300px;
            margin-left: 30px;
            padding: 20px;
            background: rgba(255, 255, 255, 0.8);
            border-radius: 10px;
            color: black;
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);
        }}
        .form-label {{
            font-weight: bold;
        }}
        .modal-img {{
            width: 100%;
            height: auto;
        }}
    </style>
</head>
<body>
    <h1>Air Quality Indicator</h1>
    <div class="d-flex">
        <div class="left-panel">
            <h4>Calculate AQI</h4>
            <form method="POST" action="/">
                <div class="mb-3">
                    <label class="form-label">Temperature (°C)</label>
                    <input type="number" step="0.1" name="temperature" class="form-control" required>
                </div>
                <div class="mb-3">
                    <label class="form-label">Relative Humidity (%)</label>
                    <input type="number" step="0.1" name="humidity" class="form-control" required>
                </div>
                <button type="submit" class="btn btn-success w-100">Calculate AQI</button>
            </form>
            {aqi_block}
        </div>

        <div class="container">
{cards}        </div>
    </div>

    <div class="modal fade" id="graphModal" tabindex="-1" aria-labelledby="graphModalLabel" aria-hidden="true">
        <div class="modal-dialog modal-lg">
            <div class="modal-content">
                <div class="modal-header">
                    <h5 class="modal-title" id="graphModalLabel">Graph</h5>
                    <button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button>
                </div>
                <div class="modal-body">
                    <img id="graphImage" class="modal-img" src="" alt="Graph Image">
                </div>
            </div>
        </div>
    </div>

    <script>
        function showGraph(filename, title) {{
            document.getElementById("graphImage").src = "/static/" + filename;
            document.getElementById("graphModalLabel").innerText = title;
        }}
    </script>
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#
    )
}
