use leptos::*;
use leptos_router::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <A href="/" class="brand">{ "IoA" }</A>
                <nav>
                    <ul class="nav-items">
                        <li>
                            <A href="/reviews" class="nav-link">
                                <span>{ "一覧表示" }</span>
                            </A>
                        </li>
                        <li>
                            <A href="/liked-reviews" class="nav-link">
                                <span>{ "いいね" }</span>
                            </A>
                        </li>
                        <li>
                            <A href="/reviews" class="nav-link">
                                <span>{ "口コミを書く" }</span>
                            </A>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
