//! Make a request, then process its response. A rejected request is logged
//! and returned without processing ever starting. Each style logs the same
//! lines in the same order:
//!
//! ```txt
//! Making request to Google
//! Response received
//! Processing response
//! Extra Information + Google says hi
//! ```
//!
//! or, for any other location:
//!
//! ```txt
//! Making request to Facebook
//! We can only talk to Google
//! ```
//!
//! `do_work_with` takes the two stages as closures so they can be swapped out;
//! `do_work` plugs in [`make_request`](crate::make_request) and
//! [`process_request`](crate::process_request).

pub mod auto {
    use core::future::Future;

    use tracing::{info, warn};

    use crate::{make_request, process_request, Error, RequestOutcome};

    pub async fn do_work(location: &str) -> Result<String, Error> {
        do_work_with(location, |l| make_request(l), |r| process_request(r)).await
    }

    pub async fn do_work_with<Req, ReqFut, Proc, ProcFut>(
        location: &str,
        request: Req,
        process: Proc,
    ) -> Result<String, Error>
    where
        Req: FnOnce(String) -> ReqFut,
        ReqFut: Future<Output = RequestOutcome>,
        Proc: FnOnce(String) -> ProcFut,
        ProcFut: Future<Output = String>,
    {
        let response = match request(location.to_owned()).await {
            Ok(response) => response,
            Err(err) => {
                warn!("{err}");
                return Err(err);
            }
        };
        info!("Response received");

        let processed = process(response).await;
        info!("{processed}");
        Ok(processed)
    }
}

/// The callback style: nothing is awaited here, the whole sequence is one
/// combinator chain handed back to the caller.
pub mod chained {
    use core::future::Future;

    use futures::{FutureExt, TryFutureExt};
    use tracing::{info, warn};

    use crate::{make_request, process_request, Error, RequestOutcome};

    pub fn do_work(location: &str) -> impl Future<Output = Result<String, Error>> {
        do_work_with(location, |l| make_request(l), |r| process_request(r))
    }

    pub fn do_work_with<Req, ReqFut, Proc, ProcFut>(
        location: &str,
        request: Req,
        process: Proc,
    ) -> impl Future<Output = Result<String, Error>>
    where
        Req: FnOnce(String) -> ReqFut,
        ReqFut: Future<Output = RequestOutcome>,
        Proc: FnOnce(String) -> ProcFut,
        ProcFut: Future<Output = String>,
    {
        request(location.to_owned())
            .inspect_ok(|_| info!("Response received"))
            .and_then(|response| process(response).map(Ok::<_, Error>))
            .inspect_ok(|processed| info!("{processed}"))
            .inspect_err(|err| warn!("{err}"))
    }
}

/// What the other two boil down to: a future which tracks which stage it is
/// in and drives the current stage's future.
pub mod manual {
    use core::{
        future::Future,
        pin::Pin,
        task::{Context, Poll},
    };
    use std::task::ready;

    use pin_project::pin_project;
    use tracing::{info, warn};

    use crate::{make_request, process_request, Error, RequestOutcome};

    pub async fn do_work(location: &str) -> Result<String, Error> {
        do_work_with(location, |l| make_request(l), |r| process_request(r)).await
    }

    pub async fn do_work_with<Req, ReqFut, Proc, ProcFut>(
        location: &str,
        request: Req,
        process: Proc,
    ) -> Result<String, Error>
    where
        Req: FnOnce(String) -> ReqFut,
        ReqFut: Future<Output = RequestOutcome>,
        Proc: FnOnce(String) -> ProcFut,
        ProcFut: Future<Output = String>,
    {
        DoWork {
            stage: Stage::Requesting(request(location.to_owned())),
            process: Some(process),
        }
        .await
    }

    #[pin_project(project = StageProj)]
    enum Stage<ReqFut, ProcFut> {
        Requesting(#[pin] ReqFut),
        Processing(#[pin] ProcFut),
        Finished,
    }

    #[pin_project]
    struct DoWork<ReqFut, Proc, ProcFut> {
        #[pin]
        stage: Stage<ReqFut, ProcFut>,
        // taken on the way from `Requesting` to `Processing`
        process: Option<Proc>,
    }

    impl<ReqFut, Proc, ProcFut> Future for DoWork<ReqFut, Proc, ProcFut>
    where
        ReqFut: Future<Output = RequestOutcome>,
        Proc: FnOnce(String) -> ProcFut,
        ProcFut: Future<Output = String>,
    {
        type Output = Result<String, Error>;

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            let mut this = self.project();
            loop {
                match this.stage.as_mut().project() {
                    StageProj::Requesting(request) => match ready!(request.poll(cx)) {
                        Ok(response) => {
                            info!("Response received");
                            let process = this
                                .process
                                .take()
                                .expect("`Requesting` is only left once");
                            this.stage.set(Stage::Processing(process(response)));
                        }
                        Err(err) => {
                            warn!("{err}");
                            this.stage.set(Stage::Finished);
                            break Poll::Ready(Err(err));
                        }
                    },
                    StageProj::Processing(processing) => {
                        let processed = ready!(processing.poll(cx));
                        info!("{processed}");
                        this.stage.set(Stage::Finished);
                        break Poll::Ready(Ok(processed));
                    }
                    StageProj::Finished => panic!("`DoWork` polled after completion"),
                }
            }
        }
    }

}
