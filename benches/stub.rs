/*
 * Copyright (c) 2025 Yunshan Networks
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::ptr;
use std::thread;
use std::time::Instant;

use criterion::*;

use ntapi::ffi::{NT_InfoRead, NT_NetRxGet, NT_StatRead};
use ntapi::types::{NtInfo_t, NtNetBuf_t, NtStatistics_t};

fn netrx(c: &mut Criterion) {
    c.bench_function("netrx_get_poll", |b| {
        b.iter_custom(|iters| {
            let mut buf: NtNetBuf_t = ptr::null_mut();
            let start = Instant::now();
            for _ in 0..iters {
                black_box(NT_NetRxGet(ptr::null_mut(), &mut buf, 0));
            }
            start.elapsed()
        })
    });
    c.bench_function("netrx_get_poll_4_threads", |b| {
        b.iter_custom(|iters| {
            let ts = (0..4)
                .map(|_| {
                    thread::spawn(move || {
                        let mut buf: NtNetBuf_t = ptr::null_mut();
                        let start = Instant::now();
                        for _ in 0..(iters / 4) {
                            black_box(NT_NetRxGet(ptr::null_mut(), &mut buf, 0));
                        }
                        start.elapsed()
                    })
                })
                .collect::<Vec<_>>();
            ts.into_iter().map(|t| t.join().unwrap()).max().unwrap()
        })
    });
}

fn read(c: &mut Criterion) {
    c.bench_function("stat_read", |b| {
        let mut stat = Box::new(NtStatistics_t::usage_data_v0());
        b.iter(|| unsafe { black_box(NT_StatRead(ptr::null_mut(), &mut *stat)) })
    });
    c.bench_function("info_read", |b| {
        let mut info = NtInfo_t::read_stream();
        b.iter(|| unsafe { black_box(NT_InfoRead(ptr::null_mut(), &mut info)) })
    });
}

criterion_group!(benches, netrx, read);
criterion_main!(benches);
