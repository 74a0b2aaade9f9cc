// HTML templates. Placeholders are `{name}` tokens replaced at render time.

pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Welcome to Polypop Nigeria Limited</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; padding: 20px; background-color: #f0f0f0; }
        h1 { color: #4CAF50; margin-bottom: 20px; }
        p { color: #333; font-size: 18px; }
        .services { display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; margin-top: 30px; }
        .service { padding: 20px; background-color: white; border-radius: 10px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); }
        .service h3 { color: #4CAF50; }
        footer { margin-top: 50px; font-size: 14px; color: #777; }
        .system-info { position: fixed; bottom: 20px; right: 20px; font-size: 14px; background-color: #fff;
                       padding: 10px; border-radius: 8px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); }
        .nav-link { position: absolute; top: 20px; left: 20px; font-size: 16px; color: #4CAF50; text-decoration: none; }
        .nav-link:hover { text-decoration: underline; }
    </style>
</head>
<body>
    <a href="/careers" class="nav-link">Careers</a>

    <h1>Welcome to Polypop Nigeria Limited!</h1>
    <p>We specialize in providing innovative solutions to make your business thrive. Explore our services below:</p>

    <div class="services">
        <div class="service">
            <h3>Web Development</h3>
            <p>Building responsive and functional websites to meet your business needs.</p>
        </div>
        <div class="service">
            <h3>Cloud Solutions</h3>
            <p>Harnessing the power of cloud computing to drive scalability and efficiency.</p>
        </div>
        <div class="service">
            <h3>Mobile Apps</h3>
            <p>Creating user-friendly mobile apps for Android and iOS platforms.</p>
        </div>
    </div>

    <footer>
        <p>From Welcome to Polypop Nigeria Limited</p>
    </footer>

    <div class="system-info">
        <p><strong>Current Date:</strong> {current_date}</p>
        <p><strong>System ID:</strong> {system_id}</p>
        <p><strong>Private IP:</strong> {private_ip}</p>
    </div>
</body>
</html>
"#;

pub const CAREERS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Careers - Polypop Nigeria Limited</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; padding: 20px; background-color: #f8f8f8;
               display: flex; flex-direction: column; align-items: center; min-height: 100vh; margin: 0; }
        .content-wrapper { width: 100%; max-width: 600px; }
        h1 { color: #4CAF50; margin-bottom: 20px; }
        .upload-form { margin: 30px 0; background-color: #fff; padding: 40px; border-radius: 10px;
                       box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); }
        .form-group { margin-bottom: 25px; width: 100%; }
        .form-group label { display: block; font-size: 16px; font-weight: bold; margin-bottom: 8px; color: #333; text-align: left; }
        .form-group input { width: 100%; max-width: 400px; padding: 12px; font-size: 16px; border-radius: 5px;
                            border: 1px solid #ddd; box-sizing: border-box; margin: 0 auto; display: block; }
        .form-group input[type="file"] { border: none; padding: 10px 0; }
        .section-title { font-size: 18px; font-weight: bold; color: #4CAF50; margin: 30px 0 20px; }
        button { background-color: #4CAF50; color: white; font-size: 16px; padding: 12px 24px; border: none;
                 border-radius: 5px; cursor: pointer; width: 100%; max-width: 400px; margin: 20px auto 0; display: block; }
        button:hover { background-color: #45a049; }
        footer { margin-top: 40px; font-size: 14px; color: #777; }
        p { color: #555; line-height: 1.5; max-width: 600px; margin: 0 auto 30px; }
    </style>
</head>
<body>
    <div class="content-wrapper">
        <h1>Careers at Polypop Nigeria Limited</h1>
        <p>We are always looking for talented individuals to join our team! Please fill in your details and upload your resume below:</p>

        <form method="POST" action="/careers" enctype="multipart/form-data" class="upload-form">
            <div class="form-group">
                <label for="name">Your Name</label>
                <input type="text" name="name" id="name" required>
            </div>

            <div class="form-group">
                <label for="phone">Phone Number:</label>
                <input type="tel" name="phone" id="phone" {phone_required} placeholder="Enter your phone number">
            </div>

            <div class="section-title">Professional Information</div>

            <div class="form-group">
                <label for="experience">Years of Experience:</label>
                <input type="number" name="experience" id="experience" min="0" max="50">
            </div>

            <div class="form-group">
                <label for="position">Position Applying For:</label>
                <input type="text" name="position" id="position" required placeholder="e.g. Software Developer, Cloud Engineer">
            </div>

            <div class="form-group">
                <label for="salary">Current Salary (Naira):</label>
                <input type="number" name="salary" id="salary" placeholder="Enter your current salary (optional)">
            </div>

            <div class="form-group">
                <label for="expected_salary">Expected Salary (Naira):</label>
                <input type="number" name="expected_salary" id="expected_salary" placeholder="Enter your expected salary (optional)">
            </div>

            <div class="form-group">
                <label for="file">Upload Your Resume</label>
                <input type="file" name="file" id="file" required accept=".pdf,.doc,.docx">
            </div>

            <button type="submit">Submit Application</button>
        </form>

        <footer>
            <p>From Polypop Nigeria Limited</p>
        </footer>
    </div>
</body>
</html>
"#;
