//! Image Slider Component
//!
//! Stacked photo viewer with wrap-around prev/next navigation.

use leptos::*;

use crate::model::Photo;

/// Photo slider for a person's attached images
#[component]
pub fn ImageSlider(photos: Vec<Photo>) -> impl IntoView {
    let count = photos.len();
    if count == 0 {
        return view! {
            <div class="text-neutral-500 italic">"No Photos"</div>
        }
        .into_view();
    }

    let (current, set_current) = create_signal(0usize);

    let next_image = move |_| {
        set_current.update(|index| *index = if *index == count - 1 { 0 } else { *index + 1 });
    };
    let prev_image = move |_| {
        set_current.update(|index| *index = if *index == 0 { count - 1 } else { *index - 1 });
    };

    let current_url = {
        let photos = photos.clone();
        move || photos[current.get()].url.clone()
    };

    view! {
        <div class="relative w-40 h-40 border rounded shadow-md flex items-center justify-center bg-neutral-100 overflow-hidden">
            {(count > 1).then(|| view! {
                <button
                    on:click=prev_image
                    class="absolute left-0 z-10 p-1 bg-neutral-900/50 text-white rounded-r-lg hover:bg-neutral-900/75 transition-opacity"
                    aria-label="Previous image"
                >
                    "‹"
                </button>
            })}

            <div class="flex justify-center items-center w-full h-full">
                <img
                    src=current_url
                    alt=move || format!("Image {}", current.get() + 1)
                    class="object-contain w-full h-full"
                />
            </div>

            {(count > 1).then(|| view! {
                <button
                    on:click=next_image
                    class="absolute right-0 z-10 p-1 bg-neutral-900/50 text-white rounded-l-lg hover:bg-neutral-900/75 transition-opacity"
                    aria-label="Next image"
                >
                    "›"
                </button>
            })}

            {(count > 1).then(|| view! {
                <div class="absolute bottom-1 right-1 px-1 text-xs bg-neutral-900/50 text-white rounded-full">
                    {move || format!("{} / {}", current.get() + 1, count)}
                </div>
            })}
        </div>
    }
    .into_view()
}
