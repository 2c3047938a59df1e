use axum::response::Html;

pub async fn index() -> Html<&'static str> {
    Html(
        r#"
<!DOCTYPE html>
<html lang="zh">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>图片百宝箱</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #faf5ff 0%, #fdf2f8 100%);
            min-height: 100vh;
            padding: 40px 20px;
        }

        .container { max-width: 800px; margin: 0 auto; }

        h1 { color: #333; margin-bottom: 30px; font-size: 2em; text-align: center; }

        .card {
            background: white;
            border-radius: 20px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.1);
            padding: 30px;
            margin-bottom: 30px;
        }

        h2 { color: #7c3aed; margin-bottom: 15px; font-size: 1.2em; }

        input[type="text"], select { padding: 10px; border: 1px solid #ddd; border-radius: 10px; width: 100%; margin-bottom: 10px; }

        button {
            background: linear-gradient(90deg, #7c3aed, #db2777);
            color: white;
            border: none;
            border-radius: 10px;
            padding: 10px 24px;
            font-weight: 600;
            cursor: pointer;
            margin-top: 10px;
        }

        .result { margin-top: 15px; color: #333; line-height: 1.6; white-space: pre-wrap; }
        .result img { max-width: 100%; border-radius: 10px; }
        .error { color: #c33; }
    </style>
</head>
<body>
    <div class="container">
        <h1>🎨 图片百宝箱</h1>

        <div class="card">
            <h2>✨ AI 生成图片</h2>
            <input type="text" id="prompt" placeholder="描述你想要的图片">
            <select id="size">
                <option value="1K">1K</option>
                <option value="2K" selected>2K</option>
                <option value="4K">4K</option>
            </select>
            <button id="generateBtn">生成</button>
            <div class="result" id="generateResult"></div>
        </div>

        <div class="card">
            <h2>🔍 图片识别</h2>
            <input type="file" id="recognizeFile" accept="image/*">
            <button id="recognizeBtn">识别</button>
            <div class="result" id="recognizeResult"></div>
        </div>

        <div class="card">
            <h2>✂️ 抠图去背景</h2>
            <input type="file" id="removeBgFile" accept="image/*">
            <button id="removeBgBtn">去背景</button>
            <div class="result" id="removeBgResult"></div>
        </div>
    </div>

    <script>
        function showError(el, message) {
            el.innerHTML = '';
            const span = document.createElement('span');
            span.className = 'error';
            span.textContent = message;
            el.appendChild(span);
        }

        async function errorMessage(response) {
            try {
                return (await response.json()).error;
            } catch (_) {
                return response.statusText;
            }
        }

        function uploadForm(inputId) {
            const file = document.getElementById(inputId).files[0];
            const formData = new FormData();
            if (file) {
                formData.append('image_file', file);
            }
            return formData;
        }

        // Network failures land in the result box instead of leaving the spinner text.
        function onSubmit(buttonId, resultId, pending, run) {
            document.getElementById(buttonId).addEventListener('click', async () => {
                const out = document.getElementById(resultId);
                out.textContent = pending;
                try {
                    await run(out);
                } catch (e) {
                    showError(out, '请求失败: ' + e.message);
                }
            });
        }

        onSubmit('generateBtn', 'generateResult', '生成中...', async (out) => {
            const response = await fetch('/api/generate', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({
                    prompt: document.getElementById('prompt').value,
                    size: document.getElementById('size').value
                })
            });
            if (!response.ok) {
                return showError(out, await errorMessage(response));
            }
            const result = await response.json();
            const url = result.data && result.data.data && result.data.data[0] && result.data.data[0].url;
            out.innerHTML = '';
            if (url) {
                const img = document.createElement('img');
                img.src = url;
                out.appendChild(img);
            } else {
                out.textContent = JSON.stringify(result.data, null, 2);
            }
        });

        onSubmit('recognizeBtn', 'recognizeResult', '识别中...', async (out) => {
            const response = await fetch('/api/recognize', {
                method: 'POST',
                body: uploadForm('recognizeFile')
            });
            if (!response.ok) {
                return showError(out, await errorMessage(response));
            }
            out.textContent = (await response.json()).result;
        });

        onSubmit('removeBgBtn', 'removeBgResult', '处理中...', async (out) => {
            const response = await fetch('/api/remove-bg', {
                method: 'POST',
                body: uploadForm('removeBgFile')
            });
            if (!response.ok) {
                return showError(out, await errorMessage(response));
            }
            const url = URL.createObjectURL(await response.blob());
            out.innerHTML = '';
            const img = document.createElement('img');
            img.src = url;
            const link = document.createElement('a');
            link.href = url;
            link.download = 'no-bg.png';
            link.textContent = '下载 PNG';
            out.appendChild(img);
            out.appendChild(link);
        });
    </script>
</body>
</html>
        "#,
    )
}
