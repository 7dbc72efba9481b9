//! Admin-panel page content constants.
//!
//! The panel is a two-state client: unauthenticated (no token) and
//! authenticated (token in local storage under `adminToken`). Transitions
//! happen only on boot, login success, logout, and a 401 response --
//! local storage is not re-read on every render.

/// Admin login page body.
pub const LOGIN_CONTENT: &str = r##"<div class="panel">
  <h1>Admin Login</h1>
  <form id="login-form" novalidate>
    <div class="field">
      <label for="username">Username</label>
      <input type="text" id="username" name="username" autocomplete="username"/>
    </div>
    <div class="field">
      <label for="password">Password</label>
      <input type="password" id="password" name="password" autocomplete="current-password"/>
    </div>
    <p class="form-error hidden" id="login-error"></p>
    <button type="submit" class="btn btn-primary btn-block">Log In</button>
  </form>
</div>
"##;

/// Posts the credentials, stores the issued token, and enters the
/// dashboard. Failures render the server's message inline; nothing is
/// retried automatically.
pub const LOGIN_SCRIPT: &str = r##"
<script>
(function(){
  var form = document.getElementById('login-form');
  var errorEl = document.getElementById('login-error');

  function showError(message){
    errorEl.textContent = message;
    errorEl.classList.remove('hidden');
  }

  form.addEventListener('submit', function(ev){
    ev.preventDefault();
    errorEl.classList.add('hidden');

    var payload = {
      username: document.getElementById('username').value.trim(),
      password: document.getElementById('password').value
    };

    fetch('/api/admin/login', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    })
      .then(function(response){
        return response.json().then(function(body){
          return { status: response.status, body: body };
        });
      })
      .then(function(result){
        if (result.status === 200 && result.body.token) {
          localStorage.setItem('adminToken', result.body.token);
          window.location.href = '/admin';
        } else {
          showError(result.body.error || 'Login failed');
        }
      })
      .catch(function(){ showError('Login failed'); });
  });
})();
</script>
"##;

/// Admin dashboard body: submissions table, delete-confirmation modal,
/// loading spinner, and error banner.
pub const DASHBOARD_CONTENT: &str = r##"<div class="container">
  <div class="topbar">
    <h1>Form Submissions</h1>
    <button id="logout-btn" class="btn btn-danger">Logout</button>
  </div>

  <div id="dashboard-error" class="banner-error hidden"></div>
  <div id="loading" class="spinner"></div>

  <div id="table-wrap" class="table-card hidden">
    <table class="table">
      <thead>
        <tr>
          <th>Name</th>
          <th>Tech Stack</th>
          <th>Timeline</th>
          <th>Budget</th>
          <th>Contact</th>
          <th style="text-align:right">Actions</th>
        </tr>
      </thead>
      <tbody id="forms-body"></tbody>
    </table>
  </div>
</div>

<div id="delete-modal" class="modal-backdrop hidden">
  <div class="modal">
    <h3>Confirm Delete</h3>
    <p>Are you sure you want to delete this form? This action cannot be undone.</p>
    <div class="actions">
      <button id="cancel-delete" class="btn btn-ghost">Cancel</button>
      <button id="confirm-delete" class="btn btn-danger">Delete</button>
    </div>
  </div>
</div>
"##;

/// Dashboard behavior. The session object is the single source of truth
/// for auth state; any 401 clears the stored token and returns to the
/// login view. The contact column strips the `Phone: ` prefix from the
/// description -- a display convention only.
pub const DASHBOARD_SCRIPT: &str = r##"
<script>
(function(){
  // Explicit two-state session: unauthenticated <-> authenticated.
  // State changes only on boot, logout, and 401 receipt.
  var session = { token: null, authenticated: false };
  var forms = [];
  var pendingDeleteId = null;

  function enterAuthenticated(token){
    session.token = token;
    session.authenticated = true;
  }

  function enterUnauthenticated(){
    session.token = null;
    session.authenticated = false;
    localStorage.removeItem('adminToken');
    window.location.href = '/admin/login';
  }

  function authHeaders(){
    return { 'Authorization': 'Bearer ' + session.token };
  }

  function showError(message){
    var banner = document.getElementById('dashboard-error');
    banner.textContent = message;
    banner.classList.remove('hidden');
  }

  function escapeHtml(value){
    var div = document.createElement('div');
    div.textContent = value;
    return div.innerHTML;
  }

  function renderForms(){
    var body = document.getElementById('forms-body');
    if (forms.length === 0) {
      body.innerHTML = '<tr><td colspan="6" class="empty">No form submissions yet</td></tr>';
      return;
    }
    body.innerHTML = forms.map(function(form){
      var contact = '+91 ' + (form.description || '').replace('Phone: ', '');
      return '<tr>'
        + '<td class="primary-cell">' + escapeHtml(form.name || 'N/A') + '</td>'
        + '<td>' + escapeHtml(form.projectType || 'N/A') + '</td>'
        + '<td>' + escapeHtml(form.timeline || 'N/A') + '</td>'
        + '<td>&#8377;' + escapeHtml(form.budget || 'N/A') + '</td>'
        + '<td>' + escapeHtml(contact) + '</td>'
        + '<td style="text-align:right"><button class="delete-link" data-id="' + form.id + '">Delete</button></td>'
        + '</tr>';
    }).join('');

    Array.prototype.forEach.call(body.querySelectorAll('.delete-link'), function(btn){
      btn.addEventListener('click', function(){
        pendingDeleteId = Number(btn.getAttribute('data-id'));
        document.getElementById('delete-modal').classList.remove('hidden');
      });
    });
  }

  function fetchForms(){
    fetch('/api/admin/forms', { headers: authHeaders() })
      .then(function(response){
        if (response.status === 401) { enterUnauthenticated(); throw new Error('unauthorized'); }
        if (!response.ok) throw new Error('Failed to fetch forms');
        return response.json();
      })
      .then(function(data){
        forms = data;
        renderForms();
        document.getElementById('table-wrap').classList.remove('hidden');
      })
      .catch(function(err){
        if (err.message !== 'unauthorized') showError('Failed to load forms');
      })
      .finally(function(){
        document.getElementById('loading').classList.add('hidden');
      });
  }

  function closeModal(){
    pendingDeleteId = null;
    document.getElementById('delete-modal').classList.add('hidden');
  }

  document.getElementById('cancel-delete').addEventListener('click', closeModal);

  document.getElementById('confirm-delete').addEventListener('click', function(){
    if (pendingDeleteId === null) return;
    var id = pendingDeleteId;

    fetch('/api/admin/forms/' + id, { method: 'DELETE', headers: authHeaders() })
      .then(function(response){
        if (response.status === 401) { enterUnauthenticated(); throw new Error('unauthorized'); }
        if (!response.ok) throw new Error('Failed to delete form');
        forms = forms.filter(function(form){ return form.id !== id; });
        renderForms();
        closeModal();
      })
      .catch(function(err){
        if (err.message !== 'unauthorized') showError('Failed to delete form');
      });
  });

  document.getElementById('logout-btn').addEventListener('click', enterUnauthenticated);

  // Boot: the one place local storage is read.
  var stored = localStorage.getItem('adminToken');
  if (!stored) { enterUnauthenticated(); return; }
  enterAuthenticated(stored);
  fetchForms();
})();
</script>
"##;
