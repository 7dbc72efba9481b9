//! Public-site page content constants.
//!
//! Each public constant provides a body fragment or script block for one
//! page; [`super::ui::router`] assembles them into full documents. Dark
//! slate theme matching the studio's branding.

/// Shared stylesheet and document head for every page.
pub const SITE_CSS: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>Sitesmith &mdash; Affordable Website Development</title>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{
  --bg:#030712;
  --surface:#111827;
  --surface-raised:#1F2937;
  --border:#374151;
  --text:#F9FAFB;
  --text-muted:#D1D5DB;
  --text-dim:#9CA3AF;
  --primary:#2563EB;
  --primary-hover:#1D4ED8;
  --accent:#60A5FA;
  --success:#22C55E;
  --danger:#EF4444;
  --font:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif
}
body{font-family:var(--font);background:var(--bg);color:var(--text);line-height:1.6;min-height:100vh;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
.container{max-width:896px;margin:0 auto;padding:32px 16px}
.hero{text-align:center;margin-bottom:32px}
.hero h1{font-size:40px;font-weight:800;line-height:1.15;margin-bottom:16px}
.hero .tagline{font-size:20px;color:var(--text-muted)}
.hero .tagline b{color:var(--accent)}
.typewriter-wrap{display:inline-flex;align-items:center;min-height:32px;font-size:20px;color:var(--accent);font-weight:600}
.caret{width:2px;height:24px;background:var(--accent);margin-left:4px}
.caret.blinking{animation:blink 1s step-end infinite}
@keyframes blink{50%{opacity:0}}
.card{background:var(--surface);border:1px solid var(--border);border-radius:12px;padding:24px;margin-bottom:24px;box-shadow:0 4px 16px rgba(0,0,0,.4)}
.card h2{font-size:24px;font-weight:700;margin-bottom:16px}
.checklist{display:grid;grid-template-columns:repeat(2,1fr);gap:14px}
.checklist .item{display:flex;align-items:flex-start;gap:8px;color:var(--text-muted)}
.checklist .tick{color:var(--success);flex-shrink:0;font-weight:700}
.cta{text-align:center;margin-top:32px}
.cta p{font-size:18px;color:var(--accent);font-weight:700;margin-bottom:16px}
.btn{display:inline-block;padding:12px 32px;border-radius:8px;border:none;font-size:17px;font-weight:700;font-family:var(--font);cursor:pointer;transition:background .15s}
.btn-primary{background:var(--primary);color:#fff}.btn-primary:hover{background:var(--primary-hover)}
.btn-danger{background:var(--danger);color:#fff}.btn-danger:hover{background:#DC2626}
.btn-ghost{background:transparent;color:var(--text-muted)}.btn-ghost:hover{color:var(--text)}
.btn-block{display:block;width:100%}
.social{display:flex;justify-content:center;gap:16px;margin-top:32px}
.social a{display:flex;align-items:center;gap:8px;background:var(--surface);border:1px solid var(--border);padding:12px 24px;border-radius:8px;font-weight:700}
.social a:hover{background:var(--surface-raised)}
.panel{max-width:448px;margin:48px auto;background:var(--surface);border:1px solid var(--border);border-radius:12px;padding:32px;box-shadow:0 8px 24px rgba(0,0,0,.5)}
.panel h1{font-size:24px;font-weight:700;margin-bottom:16px}
.field{margin-bottom:16px}
.field label{display:block;font-size:14px;font-weight:600;color:var(--text-muted);margin-bottom:6px}
.field input{width:100%;padding:10px 14px;background:var(--surface-raised);border:1px solid var(--border);border-radius:8px;color:var(--text);font-size:15px;font-family:var(--font)}
.field input:focus{outline:none;border-color:var(--primary);box-shadow:0 0 0 2px rgba(37,99,235,.35)}
.field input.invalid{border-color:var(--danger)}
.field .hint{font-size:13px;color:var(--text-dim);margin-top:4px}
.field .error,.form-error{font-size:14px;color:var(--danger);margin-top:4px}
.success-title{font-size:24px;font-weight:700;color:var(--success);margin-bottom:12px}
.hidden{display:none}
.table-card{background:var(--surface);border-radius:12px;overflow-x:auto;box-shadow:0 4px 16px rgba(0,0,0,.4)}
.table{width:100%;border-collapse:collapse;font-size:14px}
.table th{text-align:left;font-size:12px;font-weight:600;text-transform:uppercase;letter-spacing:.05em;color:var(--text-muted);background:var(--surface-raised);padding:12px 24px;border-bottom:1px solid var(--border)}
.table td{padding:14px 24px;border-bottom:1px solid var(--border);color:var(--text-muted)}
.table td.primary-cell{color:var(--text)}
.table tr:last-child td{border-bottom:none}
.table .empty{text-align:center;color:var(--text-dim);padding:24px}
.table .delete-link{color:var(--danger);background:none;border:none;cursor:pointer;font-size:14px;font-family:var(--font)}
.table .delete-link:hover{color:#F87171}
.topbar{display:flex;justify-content:space-between;align-items:center;margin-bottom:24px}
.topbar h1{font-size:28px;font-weight:700}
.banner-error{background:rgba(239,68,68,.1);border:1px solid var(--danger);color:var(--danger);padding:12px 16px;border-radius:8px;margin-bottom:16px}
.modal-backdrop{position:fixed;inset:0;background:rgba(0,0,0,.5);display:flex;align-items:center;justify-content:center;padding:16px;z-index:50}
.modal{background:var(--surface-raised);border-radius:12px;padding:24px;max-width:384px;width:100%}
.modal h3{font-size:20px;font-weight:700;margin-bottom:12px}
.modal p{color:var(--text-muted);margin-bottom:24px}
.modal .actions{display:flex;justify-content:flex-end;gap:12px}
.spinner{margin:96px auto;width:64px;height:64px;border-radius:50%;border:3px solid transparent;border-top-color:var(--primary);border-bottom-color:var(--primary);animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
@media(max-width:640px){.hero h1{font-size:30px}.checklist{grid-template-columns:1fr}}
</style></head>
"##;

/// Marketing landing page body.
pub const LANDING_BODY: &str = r##"<div class="container">
<section class="hero">
  <h1>&#128640; Affordable Website Development</h1>
  <p class="tagline">Starting at just <b>&#8377;150</b>, get a <b>fully responsive website</b>
  for your mini project, startup, or any idea! Plus, get <b>guidance on web
  development</b> from start to finish.</p>
  <div class="typewriter-wrap">
    <span id="typewriter" data-text="Your idea. Live on the web."></span>
    <span id="typewriter-caret" class="caret blinking"></span>
  </div>
</section>

<section class="card">
  <h2>What You Get:</h2>
  <div class="checklist">
    <div class="item"><span class="tick">&#10003;</span><span>Custom Website Development &ndash; Tailored to your needs</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>Fully Responsive Design &ndash; Works on mobile, tablets &amp; desktops</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>Modern Tech Stack: HTML, CSS, JavaScript, React &amp; more</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>Fast &amp; Secure Websites &ndash; Optimized for speed and security</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>User Authentication &ndash; Signup/Login system if required</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>Database Integration &ndash; Store and manage data easily</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>Admin Dashboard &ndash; Manage content &amp; users (on request)</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>SEO Friendly &ndash; Get better search rankings</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>Deployment Assistance &ndash; Get your site live hassle-free</span></div>
  </div>
</section>

<section class="card">
  <h2>&#128218; Get Guidance for Web Development for FREE</h2>
  <p style="color:var(--text-muted);margin-bottom:14px"><b>Confused about where to start?</b>
  We will personally <b>help you learn how to build a website</b>, including:</p>
  <div class="checklist">
    <div class="item"><span class="tick">&#10003;</span><span>Which Tech Stack to Choose &ndash; Frontend, Backend, Database</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>How to Develop &amp; Deploy &ndash; Step-by-step guidance</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>Best Practices &amp; Tips &ndash; Writing clean &amp; efficient code</span></div>
    <div class="item"><span class="tick">&#10003;</span><span>Project Setup &amp; Hosting &ndash; Get your website live</span></div>
  </div>
</section>

<section class="social">
  <a href="https://x.com/sitesmith" target="_blank" rel="noopener noreferrer">DM on X</a>
  <a href="https://github.com/sitesmith" target="_blank" rel="noopener noreferrer">GitHub</a>
</section>

<section class="cta">
  <p>&#9993; Get started now by building your first project from scratch!</p>
  <a href="/get-started" class="btn btn-primary">Get Started</a>
</section>
</div>
"##;

/// Timer-driven text reveal for the hero tagline: types the text one
/// character at a time, pauses, clears, and repeats. The timer chain is
/// cancelable; pagehide clears whichever timeout is pending.
pub const TYPEWRITER_SCRIPT: &str = r##"
<script>
(function(){
  var el = document.getElementById('typewriter');
  var caret = document.getElementById('typewriter-caret');
  if (!el) return;
  var text = el.getAttribute('data-text') || '';
  var typingSpeed = 100, pauseDuration = 3000;
  var index = 0, timer = null;

  function typeNextCharacter(){
    if (index < text.length) {
      el.textContent = text.substring(0, index + 1);
      index++;
      caret.classList.add('blinking');
      timer = setTimeout(typeNextCharacter, typingSpeed);
    } else {
      caret.classList.remove('blinking');
      timer = setTimeout(resetTyping, pauseDuration);
    }
  }

  function resetTyping(){
    index = 0;
    el.textContent = '';
    timer = setTimeout(typeNextCharacter, typingSpeed);
  }

  timer = setTimeout(typeNextCharacter, typingSpeed);
  window.addEventListener('pagehide', function(){ clearTimeout(timer); });
})();
</script>
"##;

/// Lead-capture form page body. Field names mirror what the form posts:
/// the phone number is embedded into the description as `Phone: <digits>`.
pub const FORM_CONTENT: &str = r##"<div id="form-panel" class="panel">
  <div style="display:flex;align-items:center;gap:8px;margin-bottom:8px">
    <a href="/" class="btn-ghost" aria-label="Back to home">&#8592;</a>
    <h1 style="margin-bottom:0">Get Started</h1>
  </div>
  <form id="lead-form" novalidate>
    <div class="field">
      <label for="name">Name</label>
      <input type="text" id="name" name="name" placeholder="Your name"/>
      <p class="error hidden" id="name-error">Name is required</p>
    </div>
    <div class="field">
      <label for="expectedTime">Expected Completion Time</label>
      <input type="text" id="expectedTime" name="expectedTime" placeholder="e.g., 2 weeks, 1 month"/>
    </div>
    <div class="field">
      <label for="techStack">Tech Stack Required</label>
      <input type="text" id="techStack" name="techStack" placeholder="e.g., React, Node.js"/>
      <p class="hint">Note: If you haven't decided on the tech stack yet or are unsure, you can leave this field empty.</p>
    </div>
    <div class="field">
      <label for="amount">Amount Offered (&#8377;)</label>
      <input type="number" id="amount" name="amount" value="150" min="150"/>
      <p class="hint">Note: The final price may vary based on project complexity and timeline requirements.</p>
    </div>
    <div class="field">
      <label for="phone">Phone Number *</label>
      <input type="tel" id="phone" name="phone" placeholder="Enter your 10-digit phone number"/>
      <p class="error hidden" id="phone-error"></p>
    </div>
    <p class="form-error hidden" id="submit-error">Failed to submit form. Please try again.</p>
    <button type="submit" class="btn btn-primary btn-block">Submit</button>
  </form>
</div>

<div id="success-panel" class="panel hidden">
  <h2 class="success-title">Thank You!</h2>
  <p style="color:var(--text-muted);margin-bottom:16px">Your form has been submitted successfully. We'll get back to you soon!</p>
  <a href="/" class="btn btn-primary btn-block" style="text-align:center">Back to Home</a>
</div>
"##;

/// Client-side validation and submission for the lead form. Required-field
/// and phone-format checks only; the backend accepts whatever arrives.
pub const FORM_SCRIPT: &str = r##"
<script>
(function(){
  var form = document.getElementById('lead-form');

  function setFieldError(id, message){
    var input = document.getElementById(id);
    var error = document.getElementById(id + '-error');
    if (message) {
      input.classList.add('invalid');
      error.textContent = message;
      error.classList.remove('hidden');
    } else {
      input.classList.remove('invalid');
      if (error) error.classList.add('hidden');
    }
  }

  function validate(){
    var valid = true;
    var name = document.getElementById('name').value.trim();
    var phone = document.getElementById('phone').value.trim();

    setFieldError('name', name ? null : 'Name is required');
    if (!name) valid = false;

    if (!phone) {
      setFieldError('phone', 'Phone number is required');
      valid = false;
    } else if (!/^\d{10}$/.test(phone)) {
      setFieldError('phone', 'Please enter a valid 10-digit phone number');
      valid = false;
    } else {
      setFieldError('phone', null);
    }
    return valid;
  }

  // Clear a field's error as soon as the user edits it again.
  ['name', 'phone'].forEach(function(id){
    document.getElementById(id).addEventListener('input', function(){
      setFieldError(id, null);
    });
  });

  form.addEventListener('submit', function(ev){
    ev.preventDefault();
    document.getElementById('submit-error').classList.add('hidden');
    if (!validate()) return;

    var payload = {
      name: document.getElementById('name').value.trim(),
      projectType: document.getElementById('techStack').value.trim(),
      timeline: document.getElementById('expectedTime').value.trim(),
      budget: document.getElementById('amount').value,
      description: 'Phone: ' + document.getElementById('phone').value.trim()
    };

    fetch('/api/submit-form', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    })
      .then(function(response){
        if (!response.ok) throw new Error('Failed to submit form');
        document.getElementById('form-panel').classList.add('hidden');
        document.getElementById('success-panel').classList.remove('hidden');
        form.reset();
      })
      .catch(function(){
        document.getElementById('submit-error').classList.remove('hidden');
      });
  });
})();
</script>
"##;
