//! HTML surface: the submission form homepage and its form handler.
//!
//! The form posts to /submit_movie, which runs the same validation and
//! creation path as the JSON API and redirects back to / on success.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::debug;

use crate::movie_store::{validate_submission, Movie, MovieSubmission};
use crate::server::metrics;
use crate::server::state::GuardedMovieStore;

use super::movie_routes::validation_error_response;

/// Escape text interpolated into the page. Covers element content and
/// double-quoted attribute values.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_movie_item(movie: &Movie) -> String {
    let poster = match &movie.poster_url {
        Some(url) => format!(
            r#"<img src="{}" alt="poster" style="height:60px;">"#,
            escape_html(url)
        ),
        None => String::new(),
    };
    format!(
        r#"<li style="margin:8px 0; list-style:none; display:flex; gap:10px; align-items:center;">
  {poster}
  <div>
    <strong>{title}</strong> ({year})<br>
    <small>{director}</small>
  </div>
</li>"#,
        poster = poster,
        title = escape_html(&movie.title),
        year = movie.year,
        director = escape_html(movie.director.as_deref().unwrap_or("")),
    )
}

fn render_homepage(movies: &[Movie]) -> String {
    let movies_list = if movies.is_empty() {
        "<li>No movies yet. Be the first!</li>".to_string()
    } else {
        movies
            .iter()
            .map(render_movie_item)
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Submit a Movie</title>
    <style>
      body {{ font-family: -apple-system, system-ui, Segoe UI, Roboto, sans-serif; margin: 24px; }}
      .card {{ max-width: 640px; border: 1px solid #e5e7eb; border-radius: 12px; padding: 16px; }}
      label {{ display:block; font-size: 14px; margin-top: 10px; }}
      input, textarea {{ width: 100%; padding: 10px; border: 1px solid #e5e7eb; border-radius: 8px; }}
      button {{ margin-top: 14px; padding: 10px 14px; border-radius: 10px; border: 1px solid #111827; background:#111827; color:white; cursor:pointer; }}
      ul {{ padding-left: 0; }}
      h1,h2 {{ margin: 10px 0; }}
    </style>
  </head>
  <body>
    <h1>What movie are you into right now?</h1>
    <div class="card">
      <form method="POST" action="/submit_movie">
        <label>Title
          <input required name="title" placeholder="Inception" />
        </label>
        <label>Year
          <input required name="year" type="number" min="1888" max="2100" placeholder="2010" />
        </label>
        <label>Director
          <input name="director" placeholder="Christopher Nolan" />
        </label>
        <label>Poster URL
          <input name="poster_url" placeholder="https://..." />
        </label>
        <label>Synopsis
          <textarea name="synopsis" rows="3" placeholder="Optional note"></textarea>
        </label>
        <label>Source (tmdb / imdb)
          <input name="source" placeholder="imdb" />
        </label>
        <label>Source ID
          <input name="source_id" placeholder="tt1375666" />
        </label>
        <button type="submit">Add Movie</button>
      </form>
    </div>

    <h2 style="margin-top:24px;">Recently submitted</h2>
    <ul>
      {movies_list}
    </ul>

    <p style="margin-top:20px;">
      Prefer JSON? Try the API: <code>POST /movies</code>
    </p>
  </body>
</html>
"#,
        movies_list = movies_list
    )
}

pub(super) async fn homepage(State(store): State<GuardedMovieStore>) -> Html<String> {
    Html(render_homepage(&store.list()))
}

pub(super) async fn submit_movie(
    State(store): State<GuardedMovieStore>,
    Form(submission): Form<MovieSubmission>,
) -> Response {
    match validate_submission(submission) {
        Ok(record) => {
            let movie = store.create(record);
            metrics::set_movies_total(store.count());
            debug!("Form submission created movie {}", movie.id);
            // 303 forces the browser back to a GET so a refresh does not
            // resubmit the form.
            Redirect::to("/").into_response()
        }
        Err(err) => validation_error_response(err),
    }
}
